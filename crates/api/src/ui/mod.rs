//! Server-rendered HTML user interface.
//!
//! [`controller`] owns the page state machine; [`form`], [`display`] and
//! [`layout`] are pure renderers from that state to HTML strings.

pub mod controller;
pub mod display;
pub mod form;
pub mod layout;
