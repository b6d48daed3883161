use crate::*;

/// Runs one command and returns whether every checked file is non-failing.
pub fn handle_command(cli: &Cli, validator: &HeuristicValidator) -> anyhow::Result<bool> {
    let default_scan = Commands::Scan { dirs: Vec::new() };
    match cli.command.as_ref().unwrap_or(&default_scan) {
        Commands::Scan { dirs } => {
            let dirs: Vec<String> = if dirs.is_empty() {
                DEFAULT_DIRS.iter().map(|d| d.to_string()).collect()
            } else {
                dirs.clone()
            };
            let root = resolve_root(cli.root.as_deref())?;
            tracing::debug!(root = %root.display(), ?dirs, "scanning");
            let report = run_scan(validator, &root, &dirs);
            let ok = report.all_valid;
            if cli.json {
                print_json(ok, report)?;
            } else {
                print!("{}", render_run(&report));
            }
            Ok(ok)
        }
        Commands::Dir { path } => {
            let path = match &cli.root {
                Some(root) if path.is_relative() => root.join(path),
                _ => path.clone(),
            };
            let name = path.display().to_string();
            let scan = scan_directory(validator, &name, path);
            let ok = scan.is_valid();
            if cli.json {
                print_json(ok, scan)?;
            } else {
                print!("{}", render_banner());
                print!("{}", render_directory_scan(&scan));
                print!("{}", render_verdict(ok));
            }
            Ok(ok)
        }
        Commands::File { path } => {
            let path = match &cli.root {
                Some(root) if path.is_relative() => root.join(path),
                _ => path.clone(),
            };
            let report = validator.validate_file(&path);
            let ok = report.is_valid();
            if cli.json {
                print_json(ok, report)?;
            } else {
                println!("{}", render_report(&report));
            }
            Ok(ok)
        }
    }
}
