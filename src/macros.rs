/// Prints one timestamped progress line to stdout.
/// Given a `chrono::DateTime<Local>` as the first argument it also prints the seconds elapsed since then,
/// which is how a run reports its total time.
/// ```
/// use sn_notes::info_time;
///
/// let episode = 1000;
/// info_time!("Downloaded: sn-{episode}-notes.pdf");
/// let run_start = chrono::Local::now();
/// info_time!(run_start, "Download complete. {} downloaded", 1);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let res = format!("{:<30} : {}", local_now, format!($strfm, $($arg),*));
        println!("{}", res);
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let run_time = (local_now - $time)
                .num_microseconds()
                .map(|n| n as f64 / 1_000_000.0)
                .unwrap_or(0.0);
        let res = format!("{:<30} : {}\nRUNTIME: {} sec", local_now, format!($strfm, $($arg),*), run_time);
        println!("{}", res);
    }};
}

/// Same line format as `info_time!`, but goes to stderr with a `WARNING` tag.
#[macro_export]
macro_rules! warn_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        eprintln!("{:<30} : WARNING: {}", local_now, format!($strfm, $($arg),*));
    }};
}
