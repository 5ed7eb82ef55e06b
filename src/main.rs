use matchday_scrape::pipeline::{self, AppConfig};

fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = AppConfig::from_env();
    println!(
        "[INFO] starting scrape run (exports -> {})",
        config.export_dir.display()
    );

    match pipeline::run(&config) {
        Ok(summary) => {
            println!(
                "[INFO] run complete: {} matches ({} real) across {} sources",
                summary.total_matches, summary.real_matches, summary.data_sources
            );
        }
        Err(err) => {
            // A failed run still leaves an artifact in the export directory.
            println!("[WARN] run failed: {err:#}");
            match pipeline::write_error_report(&config.export_dir, &format!("{err:#}")) {
                Ok(path) => println!("[INFO] error report written to {}", path.display()),
                Err(report_err) => {
                    println!("[WARN] error report not written: {report_err:#}")
                }
            }
        }
    }
}
