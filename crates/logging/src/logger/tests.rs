use std::io::{self, Write};
use std::thread;

use logging_sink::CaptureWriter;
use serde_json::json;

use super::*;
use crate::config::{CYAN, RED, YELLOW};

fn captured(options: LoggerOptions) -> (Logger, CaptureWriter) {
    let output = CaptureWriter::new();
    let logger = Logger::new(options.sinks(SinkTable::uniform(output.clone()))).unwrap();
    (logger, output)
}

fn messages(logger: &Logger) -> Vec<String> {
    logger
        .history()
        .iter()
        .map(|record| record.message().to_owned())
        .collect()
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn error_without_timestamp_is_red_message() {
    let (logger, output) = captured(LoggerOptions::new().include_timestamp(false));
    logger.log_error("test", None);
    assert_eq!(output.contents(), "\x1b[31mtest\n");
}

#[test]
fn each_category_uses_its_default_color() {
    let (logger, output) = captured(LoggerOptions::new().include_timestamp(false));
    logger.log_plain("p", None);
    logger.log_info("i", None);
    logger.log_error("e", None);
    assert_eq!(
        output.lines(),
        [format!("{YELLOW}p"), format!("{CYAN}i"), format!("{RED}e")]
    );
}

#[test]
fn default_logger_has_default_config() {
    let logger = Logger::default();
    assert_eq!(logger.config(), &LoggerConfig::default());
    assert!(logger.history().is_empty());
    assert!(logger.sublogger_names().is_empty());
}

#[test]
fn zero_capacity_fails_construction_and_fork() {
    let err = Logger::new(LoggerOptions::new().capacity(0)).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCapacity));

    let logger = Logger::new(LoggerOptions::new().print_immediately(false)).unwrap();
    let err = logger.fork(&ForkOptions::new().capacity(0)).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCapacity));
}

#[test]
fn history_is_bounded_and_ordered() {
    let logger = Logger::new(LoggerOptions::new().capacity(3).print_immediately(false)).unwrap();
    for i in 0..5 {
        logger.log_plain(format!("m{i}"), None);
    }
    assert_eq!(messages(&logger), ["m2", "m3", "m4"]);
}

#[test]
fn records_keep_payload_and_prefixes() {
    let logger = Logger::new(
        LoggerOptions::new()
            .print_immediately(false)
            .prefixes(["a", "b"]),
    )
    .unwrap();
    logger.log_info("x", Some(json!({"n": 1})));

    let history = logger.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].category(), Category::Info);
    assert_eq!(history[0].prefixes(), ["a", "b"]);
    assert_eq!(history[0].payload(), Some(&json!({"n": 1})));
}

#[test]
fn nothing_is_written_when_printing_is_disabled() {
    let (logger, output) = captured(LoggerOptions::new().print_immediately(false));
    logger.log_info("silent", None);
    assert!(output.contents().is_empty());
    assert_eq!(logger.history().len(), 1);
}

#[test]
fn child_records_propagate_to_ancestors() {
    let root = Logger::new(LoggerOptions::new().print_immediately(false)).unwrap();
    let child = root.fork(&ForkOptions::new()).unwrap();
    let grandchild = child.fork(&ForkOptions::new()).unwrap();

    root.log_plain("r", None);
    child.log_plain("c", None);
    grandchild.log_plain("g", None);

    assert_eq!(messages(&root), ["r", "c", "g"]);
    assert_eq!(messages(&child), ["c", "g"]);
    assert_eq!(messages(&grandchild), ["g"]);
}

#[test]
fn parent_records_do_not_reach_children() {
    let root = Logger::new(LoggerOptions::new().print_immediately(false)).unwrap();
    let child = root.fork(&ForkOptions::new()).unwrap();
    root.log_info("only root", None);
    assert!(child.history().is_empty());
}

#[test]
fn eviction_is_independent_per_buffer() {
    let root = Logger::new(LoggerOptions::new().capacity(5).print_immediately(false)).unwrap();
    let child = root.fork(&ForkOptions::new().capacity(2)).unwrap();
    for i in 0..4 {
        child.log_plain(format!("m{i}"), None);
    }
    assert_eq!(messages(&child), ["m2", "m3"]);
    assert_eq!(messages(&root), ["m0", "m1", "m2", "m3"]);
}

#[test]
fn child_capacity_defaults_to_parent() {
    let root = Logger::new(LoggerOptions::new().capacity(7).print_immediately(false)).unwrap();
    let child = root.fork(&ForkOptions::new()).unwrap();
    assert_eq!(child.history_buffer().capacity().get(), 7);
    assert_eq!(child.config().capacity.get(), 7);
}

#[test]
fn fork_concatenates_prefixes() {
    let root = Logger::new(LoggerOptions::new().prefixes(["a"]).print_immediately(false)).unwrap();
    let child = root.fork(&ForkOptions::new().extra_prefix("b")).unwrap();
    let replaced = root
        .fork(&ForkOptions::new().prefixes(["x"]).extra_prefix("y"))
        .unwrap();

    assert_eq!(root.prefixes(), ["a"]);
    assert_eq!(child.prefixes(), ["a", "b"]);
    assert_eq!(replaced.prefixes(), ["x", "y"]);

    child.log_plain("hi", None);
    assert_eq!(root.history()[0].prefixes(), ["a", "b"]);
}

#[test]
fn color_changes_after_fork_do_not_leak() {
    let (mut root, output) = captured(LoggerOptions::new().include_timestamp(false));
    let child = root.fork(&ForkOptions::new()).unwrap();

    root.set_color(Category::Info, "<parent>");
    child.log_info("from child", None);
    root.log_info("from root", None);

    assert_eq!(
        output.lines(),
        [format!("{CYAN}from child"), "<parent>from root".to_owned()]
    );
}

#[test]
fn child_color_override_leaves_parent_alone() {
    let (root, output) = captured(LoggerOptions::new().include_timestamp(false));
    let child = root
        .fork(&ForkOptions::new().color(Category::Error, "<child>"))
        .unwrap();

    child.log_error("c", None);
    root.log_error("r", None);

    assert_eq!(output.lines(), ["<child>c".to_owned(), format!("{RED}r")]);
}

#[test]
fn pushed_prefixes_only_affect_later_records() {
    let mut logger = Logger::new(LoggerOptions::new().print_immediately(false)).unwrap();
    logger.log_plain("before", None);
    logger.push_prefix("late");
    logger.log_plain("after", None);

    let history = logger.history();
    assert!(history[0].prefixes().is_empty());
    assert_eq!(history[1].prefixes(), ["late"]);
}

#[test]
fn call_overrides_apply_to_one_record() {
    let (logger, output) = captured(
        LoggerOptions::new()
            .include_timestamp(false)
            .prefixes(["svc"]),
    );
    logger.emit_with(
        Category::Info,
        "special",
        None,
        &CallOverrides::new().extra_prefix("[req]").color("<c>"),
    );
    logger.log_info("normal", None);

    assert_eq!(
        output.lines(),
        ["<c>svc [req] special".to_owned(), format!("{CYAN}svc normal")]
    );
    assert_eq!(logger.prefixes(), ["svc"]);

    let child = logger.fork(&ForkOptions::new()).unwrap();
    assert_eq!(child.prefixes(), ["svc"]);
    assert_eq!(child.colors().get(Category::Info), CYAN);
}

#[test]
fn replay_writes_everything_without_growing_history() {
    let (logger, output) = captured(
        LoggerOptions::new()
            .print_immediately(false)
            .include_timestamp(false),
    );
    logger.log_plain("one", None);
    logger.log_error("two", Some(json!(2)));

    logger.replay(None);
    logger.replay(None);

    assert_eq!(logger.history().len(), 2);
    assert_eq!(
        output.lines(),
        [
            format!("{YELLOW}one"),
            format!("{RED}two 2"),
            format!("{YELLOW}one"),
            format!("{RED}two 2"),
        ]
    );
}

#[test]
fn replay_accepts_a_one_off_renderer() {
    let (logger, output) = captured(LoggerOptions::new().print_immediately(false));
    logger.log_info("hello", None);

    let upper = |view: &RenderView<'_>| view.message.to_uppercase();
    logger.replay(Some(&upper));

    assert_eq!(output.lines(), ["HELLO"]);
}

#[test]
fn replay_uses_current_colors() {
    let (mut logger, output) = captured(
        LoggerOptions::new()
            .print_immediately(false)
            .include_timestamp(false),
    );
    logger.log_info("x", None);
    logger.set_color(Category::Info, "<new>");
    logger.replay(None);
    assert_eq!(output.lines(), ["<new>x"]);
}

#[test]
fn custom_renderer_is_inherited_unless_overridden() {
    let (root, output) = captured(
        LoggerOptions::new().renderer(|view: &RenderView<'_>| format!("R:{}", view.message)),
    );
    let inherited = root.fork(&ForkOptions::new()).unwrap();
    let replaced = root
        .fork(&ForkOptions::new().renderer(|view: &RenderView<'_>| format!("C:{}", view.message)))
        .unwrap();

    inherited.log_plain("a", None);
    replaced.log_plain("b", None);

    assert_eq!(output.lines(), ["R:a", "C:b"]);
}

#[test]
fn fork_can_route_to_other_sinks() {
    let (root, root_output) = captured(LoggerOptions::new().include_timestamp(false));
    let child_output = CaptureWriter::new();
    let child = root
        .fork(&ForkOptions::new().sinks(SinkTable::uniform(child_output.clone())))
        .unwrap();

    child.log_plain("routed", None);

    assert!(root_output.contents().is_empty());
    assert_eq!(child_output.lines(), [format!("{YELLOW}routed")]);
    assert_eq!(root.history().len(), 1);
}

#[test]
fn sink_failures_are_swallowed() {
    let logger = Logger::new(LoggerOptions::new().sinks(SinkTable::uniform(BrokenPipe))).unwrap();
    logger.log_error("lost", None);
    logger.replay(None);
    assert_eq!(logger.history().len(), 1);
}

#[test]
fn errors_route_to_the_error_sink() {
    let out = CaptureWriter::new();
    let err = CaptureWriter::new();
    let sinks = SinkTable::uniform(out.clone()).with_writer(Category::Error, err.clone());
    let logger = Logger::new(
        LoggerOptions::new()
            .include_timestamp(false)
            .color(Category::Error, "")
            .color(Category::Info, "")
            .sinks(sinks),
    )
    .unwrap();

    logger.log_info("fine", None);
    logger.log_error("bad", None);

    assert_eq!(out.lines(), ["fine"]);
    assert_eq!(err.lines(), ["bad"]);
}

#[test]
fn subloggers_are_registered_by_name() {
    let root = Logger::new(LoggerOptions::new().print_immediately(false)).unwrap();
    let db = root
        .add_sublogger("db", &ForkOptions::new().extra_prefix("[db]"))
        .unwrap();
    root.add_sublogger("api", &ForkOptions::new()).unwrap();

    assert_eq!(root.sublogger_names(), ["api", "db"]);
    assert!(root.sublogger("missing").is_none());

    db.log_info("query", None);
    let found = root.sublogger("db").unwrap();
    assert_eq!(found.history().len(), 1);
    assert_eq!(root.history()[0].prefixes(), ["[db]"]);
}

#[test]
fn sublogger_names_are_validated() {
    let root = Logger::new(LoggerOptions::new().print_immediately(false)).unwrap();
    root.add_sublogger("db", &ForkOptions::new()).unwrap();

    let err = root.add_sublogger("", &ForkOptions::new()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyName));

    let err = root.add_sublogger("replay", &ForkOptions::new()).unwrap_err();
    assert!(matches!(err, ConfigError::ReservedName(name) if name == "replay"));

    let err = root.add_sublogger("db", &ForkOptions::new()).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateSublogger(name) if name == "db"));

    let err = root
        .add_sublogger("zero", &ForkOptions::new().capacity(0))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCapacity));
    assert_eq!(root.sublogger_names(), ["db"]);
}

#[test]
fn forks_start_without_subloggers() {
    let root = Logger::new(LoggerOptions::new().print_immediately(false)).unwrap();
    root.add_sublogger("db", &ForkOptions::new()).unwrap();
    let child = root.fork(&ForkOptions::new()).unwrap();
    assert!(child.sublogger_names().is_empty());
}

#[test]
fn concurrent_emission_keeps_child_order_in_parent() {
    let root = Logger::new(LoggerOptions::new().capacity(1_000).print_immediately(false)).unwrap();
    let children: Vec<Logger> = (0..4)
        .map(|i| root.fork(&ForkOptions::new().extra_prefix(format!("t{i}"))).unwrap())
        .collect();

    thread::scope(|scope| {
        for child in &children {
            scope.spawn(move || {
                for n in 0..100 {
                    child.log_plain(n.to_string(), None);
                }
            });
        }
    });

    let history = root.history();
    assert_eq!(history.len(), 400);
    for (i, child) in children.iter().enumerate() {
        let tag = format!("t{i}");
        let seen: Vec<String> = history
            .iter()
            .filter(|record| record.prefixes() == [tag.clone()])
            .map(|record| record.message().to_owned())
            .collect();
        let expected: Vec<String> = (0..100).map(|n| n.to_string()).collect();
        assert_eq!(seen, expected);
        assert_eq!(child.history().len(), 100);
    }
}

#[test]
fn flush_reaches_the_sinks() {
    let (logger, output) = captured(LoggerOptions::new().include_timestamp(false));
    logger.log_plain("x", None);
    logger.flush().unwrap();
    assert_eq!(output.lines().len(), 1);
}
