//! The `depass` command
//!
//! Parses the command line, works out which store to use, and runs one
//! deprecate, restore or list against it.

use std::path::PathBuf;

use clap::Parser;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::{home_dir, DepassPaths};
use crate::config::{Settings, StorePaths};
use crate::error::{DepassError, DepassResult};
use crate::models::Account;
use crate::storage::{MoveRecord, PasswordStore, RestoreOutcome};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "depass",
    version,
    about = "Deprecate passwords inside the password store",
    after_help = "Deprecated passwords are moved into a separate folder. \
                  Each password is assigned an increasing version number for future reference. \
                  No password is ever deleted."
)]
pub struct DepassArgs {
    /// Account in password store (as in `pass show`)
    pub account: Account,

    /// Restore the latest deprecated password (refused if there is a current password)
    #[arg(short, long)]
    pub restore: bool,

    /// List the deprecated versions of the account without moving anything
    #[arg(short, long, conflicts_with = "restore")]
    pub list: bool,

    /// Path to password store [default: ~/.password-store]
    #[arg(short, long, env = "PASSWORD_STORE_DIR", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Directory for deprecated passwords inside password store [default: z_deprecated]
    #[arg(short, long, env = "DEPASS_DEPRECATED_DIR", value_name = "NAME")]
    pub dir: Option<String>,

    /// Don't record this run in the audit log
    #[arg(long)]
    pub no_audit: bool,
}

/// How a run ended, for picking the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A file was moved
    Moved,
    /// Versions were listed
    Listed,
    /// Restore requested but the archive is empty
    NothingToRestore,
}

impl Status {
    /// Process exit code for this status
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Moved | Status::Listed => 0,
            Status::NothingToRestore => 3,
        }
    }
}

/// Combine flags, environment and settings into a store layout
///
/// Flags and environment variables (already merged by clap) win over the
/// settings file, which wins over the built-in defaults. A relative store
/// path is taken relative to the working directory.
pub fn resolve_store_paths(args: &DepassArgs, settings: &Settings) -> DepassResult<StorePaths> {
    let store_root = match args.path.clone().or_else(|| settings.store_dir.clone()) {
        Some(path) if path.is_relative() => std::env::current_dir()
            .map_err(|e| DepassError::Io(format!("Failed to read working directory: {}", e)))?
            .join(path),
        Some(path) => path,
        None => home_dir()?.join(".password-store"),
    };

    let deprecated_dir = args
        .dir
        .clone()
        .unwrap_or_else(|| settings.deprecated_dir.clone());

    StorePaths::new(store_root, deprecated_dir)
}

/// Run one depass invocation
pub fn handle_depass_command(
    args: &DepassArgs,
    settings: &Settings,
    paths: &DepassPaths,
) -> DepassResult<Status> {
    let store = PasswordStore::new(resolve_store_paths(args, settings)?);
    let audit = (settings.audit_enabled && !args.no_audit)
        .then(|| AuditLogger::new(paths.audit_log()));

    if args.list {
        let versions = store.versions(&args.account)?;
        if versions.is_empty() {
            println!("No deprecated passwords were found for {}", args.account);
        }
        for version in versions {
            println!("{}", store.paths().archived_id(&args.account, version));
        }
        return Ok(Status::Listed);
    }

    let record = if args.restore {
        match store.restore(&args.account)? {
            RestoreOutcome::Restored(record) => record,
            RestoreOutcome::NothingToRestore => {
                println!("No deprecated passwords were found for {}", args.account);
                return Ok(Status::NothingToRestore);
            }
        }
    } else {
        store.deprecate(&args.account)?
    };

    println!("{}", record);

    if let Some(logger) = audit {
        record_move(&logger, &record);
    }

    Ok(Status::Moved)
}

/// The move already happened, so a failed audit write only warns
fn record_move(logger: &AuditLogger, record: &MoveRecord) {
    if let Err(e) = logger.log(&AuditEntry::from_record(record)) {
        eprintln!(
            "Warning: could not write audit log {}: {}",
            logger.path().display(),
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> DepassArgs {
        DepassArgs::try_parse_from(std::iter::once("depass").chain(args.iter().copied())).unwrap()
    }

    struct TestEnv {
        store: TempDir,
        config: TempDir,
    }

    impl TestEnv {
        fn new() -> Self {
            Self {
                store: TempDir::new().unwrap(),
                config: TempDir::new().unwrap(),
            }
        }

        fn paths(&self) -> DepassPaths {
            DepassPaths::with_base_dir(self.config.path().to_path_buf())
        }

        fn store_arg(&self) -> String {
            self.store.path().to_string_lossy().to_string()
        }

        fn run(&self, extra: &[&str]) -> DepassResult<Status> {
            let store = self.store_arg();
            let mut args = vec!["-p", store.as_str()];
            args.extend_from_slice(extra);
            handle_depass_command(&parse(&args), &Settings::default(), &self.paths())
        }
    }

    #[test]
    fn test_parse_flags() {
        let args = parse(&["email/work", "-r", "-p", "/tmp/store", "-d", "attic"]);

        assert_eq!(args.account.as_str(), "email/work");
        assert!(args.restore);
        assert!(!args.list);
        assert_eq!(args.path, Some(PathBuf::from("/tmp/store")));
        assert_eq!(args.dir.as_deref(), Some("attic"));
    }

    #[test]
    fn test_invalid_account_is_usage_error() {
        let err = DepassArgs::try_parse_from(["depass", "../escape"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_list_conflicts_with_restore() {
        assert!(DepassArgs::try_parse_from(["depass", "a", "--list", "--restore"]).is_err());
    }

    #[test]
    fn test_flags_override_settings() {
        let args = parse(&["a", "-p", "/flag/store", "-d", "flag_dir"]);
        let settings = Settings {
            store_dir: Some(PathBuf::from("/settings/store")),
            deprecated_dir: "settings_dir".into(),
            ..Settings::default()
        };

        let paths = resolve_store_paths(&args, &settings).unwrap();

        assert_eq!(paths.store_root(), PathBuf::from("/flag/store"));
        assert_eq!(paths.deprecated_dir(), "flag_dir");
    }

    #[test]
    fn test_relative_store_path_is_made_absolute() {
        let args = parse(&["a", "-p", "relative/store"]);

        let paths = resolve_store_paths(&args, &Settings::default()).unwrap();

        assert!(paths.store_root().is_absolute());
        assert!(paths.store_root().ends_with("relative/store"));
    }

    #[test]
    fn test_settings_used_without_flags() {
        let mut args = parse(&["a"]);
        args.path = None;
        args.dir = None;
        let settings = Settings {
            store_dir: Some(PathBuf::from("/settings/store")),
            deprecated_dir: "settings_dir".into(),
            ..Settings::default()
        };

        let paths = resolve_store_paths(&args, &settings).unwrap();

        assert_eq!(paths.store_root(), PathBuf::from("/settings/store"));
        assert_eq!(paths.deprecated_dir(), "settings_dir");
    }

    #[test]
    fn test_deprecate_then_restore_writes_audit_log() {
        let env = TestEnv::new();
        fs::create_dir_all(env.store.path().join("email")).unwrap();
        fs::write(env.store.path().join("email/work.gpg"), "pw").unwrap();

        assert_eq!(env.run(&["email/work"]).unwrap(), Status::Moved);
        assert_eq!(env.run(&["email/work", "--restore"]).unwrap(), Status::Moved);

        let entries: Vec<AuditEntry> = fs::read_to_string(env.paths().audit_log())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].destination, "z_deprecated/email/work.old.0");
        assert_eq!(entries[1].source, "z_deprecated/email/work.old.0");
        assert!(env.store.path().join("email/work.gpg").exists());
    }

    #[test]
    fn test_no_audit_flag() {
        let env = TestEnv::new();
        fs::write(env.store.path().join("bank.gpg"), "pw").unwrap();

        env.run(&["bank", "--no-audit"]).unwrap();

        assert!(!env.paths().audit_log().exists());
        assert!(env.store.path().join("z_deprecated/bank.old.0.gpg").exists());
    }

    #[test]
    fn test_restore_with_nothing_archived() {
        let env = TestEnv::new();

        assert_eq!(
            env.run(&["bank", "-r"]).unwrap(),
            Status::NothingToRestore
        );
        assert_eq!(Status::NothingToRestore.exit_code(), 3);
        assert!(!env.paths().audit_log().exists());
    }

    #[test]
    fn test_list_does_not_move() {
        let env = TestEnv::new();
        fs::write(env.store.path().join("bank.gpg"), "pw").unwrap();

        assert_eq!(env.run(&["bank", "--list"]).unwrap(), Status::Listed);
        assert!(env.store.path().join("bank.gpg").exists());
    }

    #[test]
    fn test_errors_propagate() {
        let env = TestEnv::new();

        let err = env.run(&["missing"]).unwrap_err();
        assert!(err.is_source_not_found());
    }
}
