use crate::mock::plain_shell;
use core::cell::{Cell, RefCell};
use libshell::{MAX_PARAMETERS, ParamType, ParamValue, ShellError, text_buffer};

#[test]
fn test_set_then_get_int() {
    let x = Cell::new(5);
    let mut shell = plain_shell();
    shell.register_parameter("x", ParamValue::Int(&x)).unwrap();

    shell.execute("set x 10").unwrap();
    assert_eq!(x.get(), 10);

    shell.io_mut().clear_output();
    shell.execute("get x").unwrap();
    assert_eq!(shell.io().output(), "x = 10\n");
}

#[test]
fn test_set_echoes_value_as_typed() {
    let gain = Cell::new(1.0f32);
    let mut shell = plain_shell();
    shell.register_parameter("gain", ParamValue::Float(&gain)).unwrap();

    shell.execute("set gain 2.5dB").unwrap();
    assert_eq!(gain.get(), 2.5);
    assert_eq!(shell.io().output(), "Set gain = 2.5dB\n");
}

#[test]
fn test_float_formatted_with_two_decimals() {
    let gain = Cell::new(1.0f32 / 3.0);
    let mut shell = plain_shell();
    shell.register_parameter("gain", ParamValue::Float(&gain)).unwrap();

    shell.execute("get gain").unwrap();
    assert_eq!(shell.io().output(), "gain = 0.33\n");
}

#[test]
fn test_bool_accepts_true_1_yes() {
    let flag = Cell::new(false);
    let mut shell = plain_shell();
    shell.register_parameter("flag", ParamValue::Bool(&flag)).unwrap();

    for (text, expected) in [
        ("yes", true),
        ("maybe", false),
        ("1", true),
        ("TRUE", false),
        ("true", true),
        ("0", false),
    ] {
        shell.execute(&format!("set flag {}", text)).unwrap();
        assert_eq!(flag.get(), expected, "set flag {}", text);
    }

    shell.io_mut().clear_output();
    shell.execute("get flag").unwrap();
    assert_eq!(shell.io().output(), "flag = false\n");
}

#[test]
fn test_unparsable_number_stores_zero() {
    let rate = Cell::new(9600);
    let mut shell = plain_shell();
    shell.register_parameter("rate", ParamValue::Int(&rate)).unwrap();

    assert_eq!(shell.execute("set rate fast"), Ok(()));
    assert_eq!(rate.get(), 0);
}

#[test]
fn test_text_truncated_to_capacity() {
    let name = text_buffer::<8>("dev");
    let mut shell = plain_shell();
    shell.register_parameter("name", ParamValue::Text(&name)).unwrap();

    shell.execute("set name sensor-node-42").unwrap();
    assert_eq!(&name.borrow()[..], b"sensor-\0");

    shell.io_mut().clear_output();
    shell.execute("get name").unwrap();
    assert_eq!(shell.io().output(), "name = sensor-\n");
}

#[test]
fn test_text_initial_value() {
    let name = text_buffer::<16>("gateway");
    let mut shell = plain_shell();
    shell.register_parameter("name", ParamValue::Text(&name)).unwrap();

    shell.execute("get name").unwrap();
    assert_eq!(shell.io().output(), "name = gateway\n");
}

#[test]
fn test_get_usage() {
    let mut shell = plain_shell();
    assert_eq!(shell.execute("get"), Err(ShellError::Usage));
    assert_eq!(shell.io().output(), "Usage: get <parameter>\n");
}

#[test]
fn test_set_usage() {
    let x = Cell::new(3);
    let mut shell = plain_shell();
    shell.register_parameter("x", ParamValue::Int(&x)).unwrap();

    assert_eq!(shell.execute("set x"), Err(ShellError::Usage));
    assert_eq!(shell.io().output(), "Usage: set <parameter> <value>\n");
    assert_eq!(x.get(), 3);
}

#[test]
fn test_unknown_parameter() {
    let mut shell = plain_shell();
    assert_eq!(shell.execute("get nope"), Err(ShellError::ParameterNotFound));
    assert_eq!(shell.execute("set nope 1"), Err(ShellError::ParameterNotFound));
    assert_eq!(
        shell.io().output(),
        "Parameter not found: nope\nParameter not found: nope\n"
    );
}

#[test]
fn test_unknown_command_changes_no_parameter() {
    let x = Cell::new(5);
    let mut shell = plain_shell();
    shell.register_parameter("x", ParamValue::Int(&x)).unwrap();

    shell.input(b"frobnicate x 99\r");
    assert_eq!(x.get(), 5);
}

#[test]
fn test_newest_parameter_wins() {
    let old = Cell::new(1);
    let new = Cell::new(2);
    let mut shell = plain_shell();
    shell.register_parameter("level", ParamValue::Int(&old)).unwrap();
    shell.register_parameter("level", ParamValue::Int(&new)).unwrap();

    shell.execute("set level 7").unwrap();
    assert_eq!((old.get(), new.get()), (1, 7));

    shell.unregister_parameter("level").unwrap();
    shell.execute("set level 8").unwrap();
    assert_eq!((old.get(), new.get()), (8, 7));
}

#[test]
fn test_unregister_unknown_parameter() {
    let mut shell = plain_shell();
    assert_eq!(
        shell.unregister_parameter("ghost"),
        Err(ShellError::ParameterNotFound)
    );
}

#[test]
fn test_invalid_registrations() {
    let x = Cell::new(0);
    let empty: RefCell<[u8; 0]> = RefCell::new([]);
    let mut shell = plain_shell();

    assert_eq!(
        shell.register_parameter("", ParamValue::Int(&x)),
        Err(ShellError::InvalidParameter)
    );
    assert_eq!(
        shell.register_parameter("empty", ParamValue::Text(&empty)),
        Err(ShellError::InvalidParameter)
    );
    assert!(shell.parameters().is_empty());
}

#[test]
fn test_full_registry_rejected() {
    let cells: Vec<Cell<i32>> = (0..=MAX_PARAMETERS).map(|_| Cell::new(0)).collect();
    let mut shell = plain_shell();

    for cell in &cells[..MAX_PARAMETERS] {
        shell.register_parameter("p", ParamValue::Int(cell)).unwrap();
    }
    assert_eq!(
        shell.register_parameter("p", ParamValue::Int(&cells[MAX_PARAMETERS])),
        Err(ShellError::OutOfMemory)
    );
    assert_eq!(shell.parameters().len(), MAX_PARAMETERS);
}

#[test]
fn test_parameter_lookup() {
    let on = Cell::new(true);
    let mut shell = plain_shell();
    shell.register_parameter("on", ParamValue::Bool(&on)).unwrap();

    let param = shell.parameter("on").unwrap();
    assert_eq!(param.param_type(), ParamType::Bool);
    assert_eq!(param.value.to_string(), "true");
    assert!(shell.parameter("off").is_none());
}
