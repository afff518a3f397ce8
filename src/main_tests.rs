    use super::cli::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;

    const GRAPH: &str = r##"{
        "root": "root",
        "nodes": {
            "root": {
                "items": [
                    { "name": "foo", "url": "job/foo", "child": "foo" },
                    { "name": "foobar", "url": "job/foobar" },
                    { "name": "zfo", "url": "job/zfo" },
                    { "name": "Manage", "url": "manage" }
                ]
            },
            "foo": {
                "items": [ { "name": "lastBuild", "url": "lastBuild" } ],
                "collections": [ {
                    "url_prefix": "build",
                    "entries": [ { "key": "3", "url": "3", "name": "#3 nightly" } ]
                } ]
            }
        }
    }"##;

    fn graph_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GRAPH.as_bytes()).unwrap();
        file
    }

    fn graph_args(path: PathBuf) -> GraphArgs {
        GraphArgs { graph: path }
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    // ─── Argument parsing ────────────────────────────────

    #[test]
    fn test_cli_parses_find() {
        let cli = Cli::try_parse_from(["tokenpath", "find", "foo bar", "--graph", "g.json", "-i"])
            .unwrap();
        assert!(cli.ignore_case);
        match cli.command {
            Commands::Find(args) => {
                assert_eq!(args.query, "foo bar");
                assert_eq!(args.graph.graph, PathBuf::from("g.json"));
                assert!(!args.json);
            }
            other => panic!("expected find, got {other:?}"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_ignore_case_is_global() {
        let before = Cli::try_parse_from(["tokenpath", "--ignore-case", "check", "-g", "g.json"])
            .unwrap();
        assert!(before.ignore_case);
        let after = Cli::try_parse_from(["tokenpath", "check", "-g", "g.json", "-i"]).unwrap();
        assert!(after.ignore_case);
        assert!(matches!(after.command, Commands::Check(_)));
        let unset = Cli::try_parse_from(["tokenpath", "check", "-g", "g.json"]).unwrap();
        assert!(!unset.ignore_case);
    }

    #[test]
    fn test_cli_parses_suggest_with_limit_and_global_flags() {
        let cli = Cli::try_parse_from([
            "tokenpath",
            "suggest",
            "fo",
            "-g",
            "g.json",
            "-n",
            "5",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Commands::Suggest(args) => {
                assert_eq!(args.max_results, 5);
                assert!(args.json);
            }
            other => panic!("expected suggest, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_requires_graph() {
        assert!(Cli::try_parse_from(["tokenpath", "find", "foo"]).is_err());
    }

    // ─── Commands ────────────────────────────────────────

    #[test]
    fn test_cmd_find_two_hops() {
        let file = graph_file();
        let args = FindArgs {
            query: "foo 3".to_string(),
            graph: graph_args(file.path().to_path_buf()),
            json: false,
        };
        let mut buf = Vec::new();
        assert!(cmd_find(&args, false, &mut buf).unwrap());
        assert_eq!(output(buf), "foo 3\t/job/foo/build/3\n");
    }

    #[test]
    fn test_cmd_find_no_match() {
        let file = graph_file();
        let args = FindArgs {
            query: "nothing".to_string(),
            graph: graph_args(file.path().to_path_buf()),
            json: false,
        };
        let mut buf = Vec::new();
        assert!(!cmd_find(&args, false, &mut buf).unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_cmd_find_ignore_case() {
        let file = graph_file();
        let args = FindArgs {
            query: "manage".to_string(),
            graph: graph_args(file.path().to_path_buf()),
            json: true,
        };
        let mut buf = Vec::new();
        assert!(!cmd_find(&args, false, &mut Vec::new()).unwrap());
        assert!(cmd_find(&args, true, &mut buf).unwrap());
        let json: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(json["path"], "Manage");
        assert_eq!(json["url"], "/manage");
    }

    #[test]
    fn test_cmd_suggest_ranked_and_limited() {
        let file = graph_file();
        let args = SuggestArgs {
            query: "fo".to_string(),
            graph: graph_args(file.path().to_path_buf()),
            max_results: 2,
            json: false,
        };
        let mut buf = Vec::new();
        assert!(cmd_suggest(&args, false, &mut buf).unwrap());
        assert_eq!(output(buf), "[1] foo\t/job/foo\n[1] zfo\t/job/zfo\n");
    }

    #[test]
    fn test_cmd_suggest_padded_query_same_distances() {
        let file = graph_file();
        let args = SuggestArgs {
            query: "  fo \t".to_string(),
            graph: graph_args(file.path().to_path_buf()),
            max_results: 2,
            json: false,
        };
        let mut buf = Vec::new();
        assert!(cmd_suggest(&args, false, &mut buf).unwrap());
        assert_eq!(output(buf), "[1] foo\t/job/foo\n[1] zfo\t/job/zfo\n");
    }

    #[test]
    fn test_cmd_suggest_json_all() {
        let file = graph_file();
        let args = SuggestArgs {
            query: "fo".to_string(),
            graph: graph_args(file.path().to_path_buf()),
            max_results: 0,
            json: true,
        };
        let mut buf = Vec::new();
        assert!(cmd_suggest(&args, false, &mut buf).unwrap());
        let json: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        let paths: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["foo", "zfo", "foobar"]);
    }

    #[test]
    fn test_cmd_suggest_blank_query() {
        let file = graph_file();
        let args = SuggestArgs {
            query: "   ".to_string(),
            graph: graph_args(file.path().to_path_buf()),
            max_results: 0,
            json: false,
        };
        let mut buf = Vec::new();
        assert!(!cmd_suggest(&args, false, &mut buf).unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_cmd_resolve_variants() {
        let file = graph_file();
        let resolve = |query: &str| {
            let args = ResolveArgs {
                query: query.to_string(),
                graph: graph_args(file.path().to_path_buf()),
                json: false,
            };
            let mut buf = Vec::new();
            let ok = cmd_resolve(&args, false, &mut buf).unwrap();
            (ok, output(buf))
        };

        assert_eq!(
            resolve("foo lastBuild"),
            (true, "exact\tfoo lastBuild\t/job/foo/lastBuild\n".to_string())
        );
        assert_eq!(
            resolve("foo night"),
            (true, "suggested\tfoo 3\t/job/foo/build/3\n".to_string())
        );
        let (ok, text) = resolve("fo");
        assert!(ok);
        assert!(text.starts_with("ambiguous\t3 candidates\n"));
        assert_eq!(resolve("zzz"), (false, "no match\n".to_string()));
    }

    #[test]
    fn test_cmd_check_summary() {
        let file = graph_file();
        let args = CheckArgs { graph: file.path().to_path_buf() };
        let mut buf = Vec::new();
        assert!(cmd_check(&args, &mut buf).unwrap());
        assert_eq!(output(buf), "OK: root 'root': 2 nodes, 5 edges, 1 collection entries\n");
    }

    #[test]
    fn test_cmd_check_rejects_dangling_child() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{ "root": "r", "nodes": { "r": {
            "items": [ { "name": "a", "url": "a", "child": "x" } ]
        } } }"#;
        file.write_all(json.as_bytes()).unwrap();
        let args = CheckArgs { graph: file.path().to_path_buf() };
        let mut buf = Vec::new();
        let err = cmd_check(&args, &mut buf).unwrap_err();
        assert!(err.to_string().contains("Unknown node 'x'"));
    }

    #[test]
    fn test_cmd_find_missing_graph_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = FindArgs {
            query: "foo".to_string(),
            graph: graph_args(dir.path().join("missing.json")),
            json: false,
        };
        let mut buf = Vec::new();
        let err = cmd_find(&args, false, &mut buf).unwrap_err();
        assert!(err.to_string().contains("Failed to load graph"));
    }
