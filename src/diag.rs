//! Process-wide verbose diagnostics.
//!
//! Verbose mode is a single shared flag. Once on, every request built in
//! the process emits a hex dump of the finished packet at `TRACE` level
//! under the `snmp_packet::dump` target. Output bytes never depend on it.
//!
//! Events go through `tracing`; the host decides where they end up. With
//! the `stderr-log` feature, [`enable_verbose`] also installs a stderr
//! subscriber if none is set yet.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn verbose diagnostics on for the rest of the process.
pub fn enable_verbose() {
    if !VERBOSE.swap(true, Ordering::Relaxed) {
        #[cfg(feature = "stderr-log")]
        install_stderr_subscriber();
        tracing::debug!(target: "snmp_packet::dump", "verbose diagnostics enabled");
    }
}

/// Set the verbose flag directly.
///
/// Unlike [`enable_verbose`] this never installs a subscriber.
pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

/// Whether verbose diagnostics are on.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Emit a hex dump of an encoded packet when verbose mode is on.
pub(crate) fn dump_packet(request_id: u32, packet: &[u8]) {
    if !is_verbose() {
        return;
    }
    tracing::trace!(
        target: "snmp_packet::dump",
        { snmp.request_id = request_id, snmp.bytes = packet.len() },
        "encoded packet\n{}",
        crate::util::hex_dump(packet)
    );
}

/// Install a stderr fmt subscriber, filtered by `RUST_LOG` or
/// `snmp_packet=trace`. Does nothing if a global subscriber already exists.
#[cfg(feature = "stderr-log")]
fn install_stderr_subscriber() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snmp_packet=trace"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
