//! Crash reporting on panic

use backtrace::Backtrace;
use chrono::Local;
use std::panic::PanicHookInfo;

/// Install the crash-reporting panic hook
pub fn init_panic_hook() {
    std::panic::set_hook(Box::new(report_panic));
    tracing::debug!("Panic hook installed");
}

fn report_panic(info: &PanicHookInfo) {
    let backtrace = Backtrace::new();
    let thread = std::thread::current();

    let report = format!(
        "duopane panic at {}\n\
         thread: {}\n\
         location: {:?}\n\
         message: {:?}\n\n\
         backtrace:\n{:?}",
        Local::now().to_rfc3339(),
        thread.name().unwrap_or("<unnamed>"),
        info.location(),
        info.payload().downcast_ref::<&str>().unwrap_or(&"<unknown>"),
        backtrace
    );

    // stderr first: it survives even when the subscriber is gone
    eprintln!("{}", report);
    tracing::error!("{}", report);

    let dump_path = std::env::temp_dir().join(format!(
        "duopane_crash_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ));

    if let Err(e) = std::fs::write(&dump_path, &report) {
        eprintln!("Could not write crash dump to {}: {}", dump_path.display(), e);
    }

    #[cfg(windows)]
    show_crash_dialog(&dump_path, info);
}

#[cfg(windows)]
fn show_crash_dialog(dump_path: &std::path::Path, info: &PanicHookInfo) {
    use windows::core::HSTRING;
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

    let msg = format!(
        "DuoPane hit an unrecoverable error and has to close.\n\n\
         A crash report was written to:\n{}\n\n\
         {:?}",
        dump_path.display(),
        info.payload().downcast_ref::<&str>().unwrap_or(&"<unknown>")
    );

    unsafe {
        MessageBoxW(
            None,
            &HSTRING::from(msg),
            &HSTRING::from("DuoPane crashed"),
            MB_ICONERROR | MB_OK,
        );
    }
}
