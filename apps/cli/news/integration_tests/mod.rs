//! End-to-end command tests against a mock news server.

mod commands;
