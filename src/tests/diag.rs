extern crate std;

use std::string::{String, ToString};
use std::vec::Vec;

use core::cell::RefCell;
use core::fmt;
use core::ptr::NonNull;

use crate::{
    diag::{DiagnosticSink, NopSink},
    list::{Handler, RemoveError},
    node::Node,
};

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<(&'static str, String)>>,
}

impl RecordingSink {
    fn record(&self, severity: &'static str, args: fmt::Arguments<'_>) {
        self.events.borrow_mut().push((severity, args.to_string()));
    }

    fn severities(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(|(s, _)| *s).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn info(&self, args: fmt::Arguments<'_>) {
        self.record("info", args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.record("warn", args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.record("error", args);
    }
}

#[test]
fn test_remove_on_empty_list_warns_and_errors() {
    let mut list = Handler::<i32, _>::with_sink(RecordingSink::default());
    let mut stray = Node::<i32>::default();

    assert_eq!(
        list.remove(NonNull::from(&mut stray)),
        Err(RemoveError::NotFound)
    );

    let events = list.sink().events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, "warn");
    assert!(events[0].1.contains("empty list"));
    assert_eq!(events[1].0, "error");
    assert!(events[1].1.contains("not found"));
}

#[test]
fn test_remove_not_found_reports_node_address() {
    let mut list = Handler::<i32, _>::with_sink(RecordingSink::default());
    let mut node1 = Node::<i32>::default();
    let mut stray = Node::<i32>::default();

    list.append(NonNull::from(&mut node1));
    assert_eq!(
        list.remove(NonNull::from(&mut stray)),
        Err(RemoveError::NotFound)
    );

    let addr = (&raw const stray) as usize;
    let events = list.sink().events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, "error");
    assert!(events[0].1.contains(&addr.to_string()));
}

#[test]
fn test_successful_removal_reports_info() {
    let mut list = Handler::<i32, _>::with_sink(RecordingSink::default());
    let mut node1 = Node::<i32>::default();
    let mut node2 = Node::<i32>::default();

    list.append(NonNull::from(&mut node1));
    list.append(NonNull::from(&mut node2));
    assert_eq!(list.remove(NonNull::from(&mut node2)), Ok(()));

    let addr = (&raw const node2) as usize;
    let events = list.sink().events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, "info");
    assert!(events[0].1.contains(&addr.to_string()));
}

#[test]
fn test_queries_stay_silent() {
    let mut list = Handler::<i32, _>::with_sink(RecordingSink::default());
    let mut node1 = Node::<i32>::default();
    let mut stray = Node::<i32>::default();

    list.append(NonNull::from(&mut node1));
    list.head();
    list.tail();
    list.find(NonNull::from(&mut node1));
    list.find(NonNull::from(&mut stray));
    list.count();

    assert!(list.sink().severities().is_empty());
}

#[test]
fn test_nop_sink_discards() {
    // Smoke check that the default sink accepts all severities.
    let sink = NopSink;
    sink.info(format_args!("info"));
    sink.warn(format_args!("warn"));
    sink.error(format_args!("error"));
}
