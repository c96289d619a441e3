//! `gitviz render` command.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::{Result, VisualizerError};
use crate::graph::build_graph;
use crate::history::parse_log;

/// Prefix of scratch clone directories under the system temp dir.
const CLONE_DIR_PREFIX: &str = "gitviz-";

/// What a successful render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Where the diagram was written.
    pub output: PathBuf,
    /// Commits drawn.
    pub commits: usize,
    /// Distinct files drawn.
    pub files: usize,
}

/// Execute the `render` command and print where the diagram went.
///
/// # Errors
///
/// Returns an error string if any step of [`visualize`] fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    config: &Path,
    work_dir: &Path,
) -> std::result::Result<(), String> {
    let report = visualize(ctx, config, work_dir).map_err(|e| e.to_string())?;
    println!(
        "Diagram with {} commits and {} files has been written to {}",
        report.commits,
        report.files,
        report.output.display()
    );
    Ok(())
}

/// Load settings, clone, extract the log, and write the rendered diagram.
///
/// `output_file` is resolved against `work_dir`. The scratch clone is removed
/// afterwards whether or not rendering succeeded.
///
/// # Errors
///
/// Returns a [`VisualizerError`] naming the step that failed.
pub fn visualize(ctx: &ServiceContext, config: &Path, work_dir: &Path) -> Result<RenderReport> {
    let settings = Settings::load(ctx, config)?;

    let clone_dir =
        std::env::temp_dir().join(format!("{CLONE_DIR_PREFIX}{}", ctx.id_gen.generate_id()));
    info!(url = %settings.repo_url, dest = %clone_dir.display(), "cloning repository");
    println!("Cloning repository from {} into {}", settings.repo_url, clone_dir.display());
    ctx.git.clone_repo(&settings.repo_url, &clone_dir).map_err(|e| VisualizerError::Clone {
        url: settings.repo_url.clone(),
        message: e.to_string(),
    })?;

    let result = render_clone(ctx, &settings, &clone_dir, work_dir);

    if let Err(e) = ctx.fs.remove_dir_all(&clone_dir) {
        warn!(dir = %clone_dir.display(), error = %e, "failed to remove scratch clone");
    }
    result
}

fn render_clone(
    ctx: &ServiceContext,
    settings: &Settings,
    clone_dir: &Path,
    work_dir: &Path,
) -> Result<RenderReport> {
    let since = settings.since();
    let raw = ctx
        .git
        .log_since(clone_dir, &since)
        .map_err(|e| VisualizerError::Log(e.to_string()))?;

    let commits = parse_log(&raw);
    if commits.is_empty() {
        warn!(since = %since, "no commits in range, writing an empty diagram");
    }
    let graph = build_graph(&commits);
    let text = settings.output_format.render(&graph)?;

    let output = work_dir.join(&settings.output_file);
    ctx.fs.write(&output, &text).map_err(|e| VisualizerError::Write {
        path: output.clone(),
        message: e.to_string(),
    })?;
    info!(path = %output.display(), "diagram written");

    Ok(RenderReport { output, commits: graph.commit_nodes.len(), files: graph.file_nodes.len() })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::adapters::replaying::{ReplayingGitRepo, ReplayingIdGenerator};
    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;
    use crate::ports::{FileSystem, PortError};

    const SETTINGS: &str = "repo_url: https://example.com/demo.git\n\
                            output_file: out/graph.puml\n\
                            commit_date: 2024-11-15\n";

    const LOG: &str = "a2|Add feature|a1\nfile2.txt\nfile1.txt\n\na1|Initial commit|\nfile1.txt";

    /// In-memory filesystem so tests can inspect what was written.
    #[derive(Clone, Default)]
    struct MemoryFs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
        removed: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl FileSystem for MemoryFs {
        fn read_to_string(&self, path: &Path) -> std::result::Result<String, PortError> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| format!("{} not found", path.display()).into())
        }

        fn write(&self, path: &Path, contents: &str) -> std::result::Result<(), PortError> {
            self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn remove_dir_all(&self, path: &Path) -> std::result::Result<(), PortError> {
            self.removed.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn git_cassette(clone_output: serde_json::Value, log_output: serde_json::Value) -> Cassette {
        Cassette {
            name: "render".into(),
            recorded_at: Utc::now(),
            repo_url: "https://example.com/demo.git".into(),
            interactions: vec![
                interaction(0, "id_gen", "generate_id", json!("test-clone")),
                interaction(1, "git", "clone_repo", clone_output),
                interaction(2, "git", "log_since", log_output),
            ],
        }
    }

    /// Context whose filesystem is `fs` and whose git/id ports replay `cassette`.
    fn context(fs: &MemoryFs, cassette: &Cassette) -> ServiceContext {
        ServiceContext::new(
            Box::new(fs.clone()),
            Box::new(ReplayingGitRepo::new(CassetteReplayer::new(cassette))),
            Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(cassette))),
        )
    }

    fn memory_fs_with_settings(settings: &str) -> MemoryFs {
        let fs = MemoryFs::default();
        fs.write(Path::new("/work/config.yaml"), settings).unwrap();
        fs
    }

    #[test]
    fn renders_plantuml_into_work_dir() {
        let fs = memory_fs_with_settings(SETTINGS);
        let ctx = context(&fs, &git_cassette(json!({"ok": null}), json!({"ok": LOG})));

        let report =
            visualize(&ctx, Path::new("/work/config.yaml"), Path::new("/work")).unwrap();
        assert_eq!(report.output, PathBuf::from("/work/out/graph.puml"));
        assert_eq!((report.commits, report.files), (2, 2));

        let written = fs.read_to_string(&report.output).unwrap();
        assert!(written.starts_with("@startuml"));
        assert!(written.ends_with("@enduml"));
        assert!(written.contains("rectangle \"Initial commit\" as Commit1"));
        assert!(written.contains("Commit1 <|-- Commit2"));

        let removed = fs.removed.lock().unwrap();
        assert_eq!(removed.len(), 1);
        assert!(removed[0].ends_with("gitviz-test-clone"));
    }

    #[test]
    fn empty_range_writes_empty_diagram() {
        let fs = memory_fs_with_settings(SETTINGS);
        let ctx = context(&fs, &git_cassette(json!({"ok": null}), json!({"ok": ""})));

        let report =
            visualize(&ctx, Path::new("/work/config.yaml"), Path::new("/work")).unwrap();
        assert_eq!(report.commits, 0);
        let written = fs.read_to_string(&report.output).unwrap();
        assert!(!written.contains("rectangle \""));
        assert!(written.ends_with("@enduml"));
    }

    #[test]
    fn json_format_from_settings() {
        let fs = memory_fs_with_settings(
            "repo_url: u\noutput_file: graph.json\ncommit_date: 2024-01-01\noutput_format: json\n",
        );
        let ctx = context(&fs, &git_cassette(json!({"ok": null}), json!({"ok": LOG})));

        let report =
            visualize(&ctx, Path::new("/work/config.yaml"), Path::new("/work")).unwrap();
        let written = fs.read_to_string(&report.output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["commitNodes"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn clone_failure_is_reported() {
        let fs = memory_fs_with_settings(SETTINGS);
        let ctx = context(
            &fs,
            &git_cassette(json!({"err": "repository not found"}), json!({"ok": ""})),
        );

        let err = visualize(&ctx, Path::new("/work/config.yaml"), Path::new("/work")).unwrap_err();
        assert!(matches!(err, VisualizerError::Clone { .. }));
        assert!(err.to_string().contains("repository not found"));
        assert!(fs.removed.lock().unwrap().is_empty());
    }

    #[test]
    fn log_failure_still_removes_clone() {
        let fs = memory_fs_with_settings(SETTINGS);
        let ctx = context(
            &fs,
            &git_cassette(json!({"ok": null}), json!({"err": "does not have any commits"})),
        );

        let err = visualize(&ctx, Path::new("/work/config.yaml"), Path::new("/work")).unwrap_err();
        assert!(matches!(err, VisualizerError::Log(_)));
        assert_eq!(fs.removed.lock().unwrap().len(), 1);
    }

    #[test]
    fn missing_settings_file() {
        let fs = MemoryFs::default();
        let ctx = context(&fs, &git_cassette(json!({"ok": null}), json!({"ok": ""})));

        let err = visualize(&ctx, Path::new("/work/missing.yaml"), Path::new("/work")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn full_session_replays_from_cassette() {
        let cassette = Cassette {
            name: "render".into(),
            recorded_at: Utc::now(),
            repo_url: "https://example.com/demo.git".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "fs".into(),
                    method: "exists".into(),
                    input: json!({"path": "/work/config.yaml"}),
                    output: json!(true),
                },
                Interaction {
                    seq: 1,
                    port: "fs".into(),
                    method: "read_to_string".into(),
                    input: json!({"path": "/work/config.yaml"}),
                    output: json!({ "ok": SETTINGS }),
                },
                Interaction {
                    seq: 2,
                    port: "id_gen".into(),
                    method: "generate_id".into(),
                    input: json!({}),
                    output: json!("abc"),
                },
                Interaction {
                    seq: 3,
                    port: "git".into(),
                    method: "clone_repo".into(),
                    input: json!({"url": "https://example.com/demo.git"}),
                    output: json!({"ok": null}),
                },
                Interaction {
                    seq: 4,
                    port: "git".into(),
                    method: "log_since".into(),
                    input: json!({"since": "2024-11-15"}),
                    output: json!({ "ok": LOG }),
                },
                Interaction {
                    seq: 5,
                    port: "fs".into(),
                    method: "write".into(),
                    input: json!({"path": "/work/out/graph.puml"}),
                    output: json!({"ok": null}),
                },
                Interaction {
                    seq: 6,
                    port: "fs".into(),
                    method: "remove_dir_all".into(),
                    input: json!({}),
                    output: json!({"ok": null}),
                },
            ],
        };

        let ctx = ServiceContext::from_cassette(&cassette);
        let result = run_with_context(&ctx, Path::new("/work/config.yaml"), Path::new("/work"));
        assert!(result.is_ok(), "{result:?}");
    }
}
