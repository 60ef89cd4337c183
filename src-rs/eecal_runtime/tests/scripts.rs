//! Runs whole scripts through the runtime

use eecal_quantity::RenderOptions;
use eecal_runtime::{LineError, Runtime, RuntimeConfig};
use eecal_shared::error::{AsEecalError, EecalError};

fn value_only() -> Runtime {
    Runtime::new(RuntimeConfig::new().with_render(RenderOptions::value_only()))
}

#[test]
fn series_and_parallel() {
    let mut runtime = value_only();
    let report = runtime.run_script("a = 12k\nb = 31k\n\na + b\na | b\n");

    let outputs: Vec<_> = report.outputs().collect();
    assert_eq!(
        outputs,
        ["a = 12.0kΩ", "b = 31.0kΩ", "43.0kΩ", "8.65kΩ"]
    );
    assert!(!report.has_errors());
}

#[test]
fn full_rendering_of_a_current() {
    let mut runtime = Runtime::default();
    let report = runtime.run_script("i = 12µA 5%");

    let outputs: Vec<_> = report.outputs().collect();
    assert_eq!(
        outputs,
        ["i = 12.0µA ± 5.0% (± 600.0nA) [11.4000 .. 12.6000]µA"]
    );
}

#[test]
fn voltage_divider_script() {
    let script = "\
# divider from 5V
vin = 5V 1%
r1 = 10k 1%
r2 = 10k 1%
vout = vin * (r2 // r1)
";
    let mut runtime = value_only();
    let report = runtime.run_script(script);

    assert!(!report.has_errors());
    let last = report.lines().last().expect("script has output");
    assert_eq!(last.number, 5);
    assert_eq!(last.result.as_deref(), Ok("vout = 2.5V"));
}

#[test]
fn errors_do_not_stop_the_script() {
    let script = "a = 1k\nb = a + c\nd = a * 2f\n";
    let mut runtime = value_only();
    let report = runtime.run_script(script);

    assert!(report.has_errors());
    let outputs: Vec<_> = report.outputs().collect();
    assert_eq!(outputs, ["a = 1.0kΩ", "d = 2.0kΩ"]);

    let error = report.errors().next().expect("one line failed");
    let error = EecalError::from_error_with_source(error, "divider.ee", script);
    assert_eq!(error.message(), "unknown variable `c`");

    let location = error.location().expect("error has a location");
    assert_eq!(location.line(), 2);
    assert_eq!(location.column(), 9);
    assert_eq!(location.line_source(), "b = a + c");
}

#[test]
fn parse_error_context_points_into_the_script() {
    let script = "a = 1k\nb = (a + 2k\n";
    let mut runtime = value_only();
    let report = runtime.run_script(script);

    let error = report.errors().next().expect("one line failed");
    assert!(matches!(error.error(), LineError::Parse(_)));

    let error = EecalError::from_error_with_source(error, "script.ee", script);
    assert_eq!(error.message(), "unclosed `(`");

    let (_, opened_at) = &error.context_with_source()[0];
    assert_eq!(opened_at.line(), 2);
    assert_eq!(opened_at.column(), 5);
}

#[test]
fn exit_ends_the_script() {
    let mut runtime = value_only();
    let report = runtime.run_script("a = 1k\nexit\nb = 2k\n");

    assert_eq!(report.lines().len(), 1);
    assert!(!runtime.environment().contains("b"));
}

#[test]
fn windows_line_endings() {
    let mut runtime = value_only();
    let report = runtime.run_script("a = 1k\r\nb = 2k\r\na + b\r\n");

    assert!(!report.has_errors());
    assert_eq!(report.outputs().last(), Some("3.0kΩ"));
}

#[test]
fn temperature_shift_script() {
    let script = "\
r1 = 1k 1% 200ppm
r2 = 2k 1% 150ppm
r1 @ 100°C + r2
(r1 @ 100) + (r2 @ 100)
";
    let config = RuntimeConfig::new()
        .with_render(RenderOptions::value_only().with_temperature(true));
    let mut runtime = Runtime::new(config);
    let report = runtime.run_script(script);

    let outputs: Vec<_> = report.outputs().collect();
    assert_eq!(outputs[2], "3.02kΩ @ mixed temp.");
    assert_eq!(outputs[3], "3.04kΩ @ 100°C");
}

#[test]
fn sensitivity_after_a_script() {
    let mut runtime = Runtime::default();
    runtime.run_script("i1 = 3mA\nr1 = 120k\nr2 = 440k\n");

    let report = runtime
        .sensitivity("(r1 | r2) * i1")
        .expect("target should evaluate");
    let table = report.to_string();

    let header = table.lines().next().expect("table has a header");
    assert_eq!(
        header,
        "variable    0.10%    0.50%    1.00%    2.00%    5.00%   10.00%"
    );
    assert_eq!(table.lines().count(), 4);
}

#[test]
fn sensitivity_of_an_unknown_variable() {
    let runtime = Runtime::default();
    let error = runtime.sensitivity("x * 2f").expect_err("x is unknown");
    assert_eq!(error.message(), "unknown variable `x`");
}
