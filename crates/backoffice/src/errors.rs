use std::sync::OnceLock;

use backoffice::config;
use color_eyre::Result;
use tracing::error;

use crate::logging::LOG_FILE;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the eyre report hooks and the panic handler. Idempotent.
pub fn init() -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    // try_into_hooks avoids a panic when a theme is already installed
    let hooks = color_eyre::config::HookBuilder::default()
        .panic_section(panic_section())
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;

    let (panic_hook, eyre_hook) = hooks;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let metadata = metadata!();
            let file_path = handle_dump(&metadata, panic_info);
            print_msg(file_path, &metadata)
                .expect("human-panic: printing error message to console failed");
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }
        let msg = format!("{}", panic_hook.panic_report(panic_info));
        error!("Error: {}", strip_ansi_escapes::strip_str(msg));

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));

    let _ = INIT.set(());

    Ok(())
}

/// Shown under every panic report; points at the log written by `logging::init`.
fn panic_section() -> String {
    format!(
        "backoffice {} crashed. Please report this and attach the log file {}",
        env!("CARGO_PKG_VERSION"),
        config::get_data_dir().join(LOG_FILE.as_str()).display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_section_names_version_and_log_file() {
        let section = panic_section();
        assert!(section.starts_with(&format!("backoffice {} crashed", env!("CARGO_PKG_VERSION"))));
        assert!(section.ends_with("backoffice.log"), "{section}");
    }
}
