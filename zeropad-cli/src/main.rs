use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use zeropad_core::{
    apply_operation, plan_operation, Error, OutputFormatter, PlanOptions, RenameOutcome,
    ScanOptions,
};

mod cli;

use cli::{Cli, OutputFormatArg};

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code_for(&e));
        },
    }
}

/// Map the typed core error to the documented exit codes: 1 for planning
/// conflicts, 2 for a missing directory or invalid input, 3 otherwise.
fn exit_code_for(e: &anyhow::Error) -> i32 {
    match e.chain().find_map(|cause| cause.downcast_ref::<Error>()) {
        Some(Error::Conflict(_)) => 1,
        Some(Error::NotFound { .. } | Error::InvalidReplace(_)) => 2,
        _ => 3,
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let root = cli
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let use_color = if cli.no_color { Some(false) } else { None };

    let scan_options = ScanOptions {
        all_extensions: cli.all_extensions,
    };
    let plan_options = PlanOptions {
        replace: parse_replace_args(&cli.replace)?,
    };

    if cli.dry_run {
        let (result, preview) = plan_operation(
            &root,
            &scan_options,
            &plan_options,
            cli.preview.into(),
            use_color,
        )?;

        match cli.output {
            OutputFormatArg::Json => println!("{}", result.format_json()),
            OutputFormatArg::Summary => {
                if let Some(preview) = preview {
                    print!("{}", preview);
                }
                if !cli.quiet {
                    print!("{}", result.format_summary());
                }
            },
        }

        return Ok(0);
    }

    let result = apply_operation(&root, &scan_options, &plan_options)?;

    match cli.output {
        OutputFormatArg::Json => println!("{}", result.format_json()),
        OutputFormatArg::Summary => {
            if cli.quiet {
                // Failures still surface on stderr; only the happy-path
                // summary is suppressed.
                for outcome in &result.report.outcomes {
                    if let RenameOutcome::Failed { from, to, error } = outcome {
                        eprintln!("✗ {} -> {}: {}", from, to, error);
                    }
                }
            } else {
                print!("{}", result.format_summary());
            }
        },
    }

    Ok(if result.report.failed > 0 { 3 } else { 0 })
}

/// Parse repeated `--replace from=to` values, stripping shell quoting the
/// way users tend to pass it.
fn parse_replace_args(args: &[String]) -> Result<Vec<(String, String)>, Error> {
    args.iter()
        .map(|arg| {
            let (from, to) = arg
                .split_once('=')
                .ok_or_else(|| Error::InvalidReplace(arg.clone()))?;
            if from.is_empty() || to.contains('=') {
                return Err(Error::InvalidReplace(arg.clone()));
            }
            let strip = |s: &str| s.trim_matches(|c| c == '\'' || c == '"').to_string();
            Ok((strip(from), strip(to)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replace_basic() {
        let pairs = parse_replace_args(&["img=pic".to_string()]).unwrap();
        assert_eq!(pairs, vec![("img".to_string(), "pic".to_string())]);
    }

    #[test]
    fn test_parse_replace_strips_quotes() {
        let pairs = parse_replace_args(&["'img'=\"pic\"".to_string()]).unwrap();
        assert_eq!(pairs, vec![("img".to_string(), "pic".to_string())]);
    }

    #[test]
    fn test_parse_replace_allows_empty_target() {
        let pairs = parse_replace_args(&["draft-=".to_string()]).unwrap();
        assert_eq!(pairs, vec![("draft-".to_string(), String::new())]);
    }

    #[test]
    fn test_parse_replace_rejects_missing_separator() {
        let err = parse_replace_args(&["nonsense".to_string()]).unwrap_err();
        assert!(matches!(err, Error::InvalidReplace(_)));
    }

    #[test]
    fn test_parse_replace_rejects_extra_separator() {
        let err = parse_replace_args(&["a=b=c".to_string()]).unwrap_err();
        assert!(matches!(err, Error::InvalidReplace(_)));
    }

    #[test]
    fn test_parse_replace_rejects_empty_source() {
        let err = parse_replace_args(&["=x".to_string()]).unwrap_err();
        assert!(matches!(err, Error::InvalidReplace(_)));
    }
}
