//! Session-level tests driving a shell through a scripted transport.

mod mock;

mod history;
mod parameters;
