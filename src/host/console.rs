//! Operator console commands.
//!
//! Translates the host's console/command surface into watchdog queries.
//! Replies are free-form text aimed at a human operator, not a stable
//! wire contract.

use crate::host::HostHandle;
use crate::session::lifecycle::SessionLifecycle;
use crate::VERSION;

/// Module name shown in console replies.
pub const MODULE_NAME: &str = "Idle Watchdog";

/// Handle one console invocation.
///
/// `status` replies with the live status table; anything else, including
/// an empty invocation, replies with module name and version.
pub fn handle_command<H: HostHandle>(lifecycle: &SessionLifecycle<H>, args: &[&str]) -> String {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        Some("status") => lifecycle.status().to_string(),
        _ => module_info(),
    }
}

fn module_info() -> String {
    format!(
        "{MODULE_NAME} info:\n\
         Module name:    {MODULE_NAME}\n\
         Module version: {VERSION}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::host::directive::ReloadDirective;
    use crate::host::participant::Participant;
    use std::sync::Arc;

    struct NullHost;

    impl HostHandle for NullHost {
        fn request_environment_change(&self, _directive: ReloadDirective) {}

        fn connected_participants(&self) -> Vec<Participant> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn status_reply_carries_live_counters() {
        let lifecycle = SessionLifecycle::new(Config::default(), Arc::new(NullHost));
        lifecycle.on_environment_start("de_dust2");

        let reply = handle_command(&lifecycle, &["status"]);
        assert!(reply.contains("Map change count:            1"));
        assert!(reply.contains("Current player count:        0"));
        assert!(reply.contains("Default map:                 de_dust2"));
        assert!(reply.contains("Timer started:               No"));
    }

    #[tokio::test]
    async fn status_subcommand_is_case_insensitive() {
        let lifecycle = SessionLifecycle::new(Config::default(), Arc::new(NullHost));
        let reply = handle_command(&lifecycle, &["STATUS"]);
        assert!(reply.contains("Map change count:"));
    }

    #[tokio::test]
    async fn unknown_subcommand_replies_module_info() {
        let lifecycle = SessionLifecycle::new(Config::default(), Arc::new(NullHost));
        let reply = handle_command(&lifecycle, &["bogus"]);
        assert!(reply.contains(MODULE_NAME));
        assert!(reply.contains(VERSION));
    }

    #[tokio::test]
    async fn empty_invocation_replies_module_info() {
        let lifecycle = SessionLifecycle::new(Config::default(), Arc::new(NullHost));
        let reply = handle_command(&lifecycle, &[]);
        assert!(reply.contains("Module version:"));
    }
}
