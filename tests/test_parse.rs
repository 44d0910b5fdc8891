// Copyright (c) 2026 The hpgl developers.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use hpgl::ast::Command;
use hpgl::parse::{self, ParseOptions};
use hpgl::ErrorKind;

fn parse_all(src: &str) -> Vec<Command<'_>> {
    parse::commands(src).collect::<Result<_, _>>().unwrap()
}

fn mnemonics(src: &str) -> Vec<String> {
    parse_all(src).into_iter().map(|c| c.mnemonic).collect()
}

fn args<'a>(cmd: &Command<'a>) -> Vec<&'a str> {
    cmd.args.iter().map(|t| t.text).collect()
}

#[test]
fn test_parse() {
    let src = r#"
        DT&
        PU12,0
        PD12,13
        LBa-label&
        DT_
        XY12,13,432,2 234
        LBa-label_
        PE a b # c;
        SM c
        PD14,0
        PU15,16 17 18;
        "#;

    let cmds = parse_all(src);
    let names: Vec<_> = cmds.iter().map(|c| c.mnemonic.as_str()).collect();
    assert_eq!(names, ["DT", "PU", "PD", "LB", "DT", "XY", "LB", "PE", "SM", "PD", "PU"]);

    // make sure we count commands correctly
    for (i, cmd) in cmds.iter().enumerate() {
        assert_eq!(cmd.index, i);
    }

    assert_eq!(args(&cmds[0]), ["&"]);
    assert_eq!(args(&cmds[2]), ["12", "13"]);
    assert_eq!(args(&cmds[3]), ["a-label"]);
    assert_eq!(args(&cmds[5]), ["12", "13", "432", "2", "234"]);
    assert_eq!(args(&cmds[6]), ["a-label"]);
    assert_eq!(cmds[7].raw, "a b # c");
    assert_eq!(args(&cmds[8]), ["c"]);
    assert_eq!(args(&cmds[10]), ["15", "16", "17", "18"]);
}

#[test]
fn test_display() {
    let src = "in;sp1;pu 10, 10 pd10,30,20 30;";
    let printed: Vec<_> = parse_all(src).iter().map(|c| c.to_string()).collect();
    assert_eq!(printed, ["IN;", "SP1;", "PU10,10;", "PD10,30,20,30;"]);
}

#[test]
fn test_positions() {
    let cmds = parse_all("IN;PU 10,20;\nPD");
    assert_eq!(cmds[1].offset, 3);
    assert_eq!(cmds[1].raw, "10,20");
    assert_eq!(cmds[1].args[0].offset, 6);
    assert_eq!(cmds[1].args[1].offset, 9);
    assert_eq!(cmds[2].offset, 13);
    assert!(cmds[2].args.is_empty());
}

#[test]
fn test_implicit_terminator() {
    assert_eq!(mnemonics("PU 20, 30 PD 20, 10"), ["PU", "PD"]);
    assert_eq!(mnemonics("INPU1,1SP2"), ["IN", "PU", "SP"]);
    // a final command does not need a semicolon
    let cmds = parse_all("PD1,2");
    assert_eq!(args(&cmds[0]), ["1", "2"]);
}

#[test]
fn test_empty() {
    assert!(parse_all("").is_empty());
    assert!(parse_all("  \n\t").is_empty());
    assert!(parse_all(";;\n;").is_empty());
}

#[test]
fn test_argument_splitting() {
    assert_eq!(args(&parse_all("PU 12 13,")[0]), ["12", "13"]);
    assert_eq!(args(&parse_all("PU12 ,13")[0]), ["12", "13"]);
    assert_eq!(args(&parse_all("PD12, , 13")[0]), ["12", "", "13"]);
    assert_eq!(args(&parse_all("PU, 12")[0]), ["", "12"]);
    assert_eq!(args(&parse_all("PU12,,")[0]), ["12", ""]);
    // only the blanks that also separate commands split arguments
    assert_eq!(args(&parse_all("PU0,0\u{0B}1,1;")[0]), ["0", "0\u{0B}1", "1"]);
    assert_eq!(args(&parse_all("PU0\u{A0}1;")[0]), ["0\u{A0}1"]);
    let err = parse::commands("PU0,0;\u{0B}PD1,1;").find_map(Result::err).unwrap();
    assert_eq!(err.kind, ErrorKind::UnrecognizedSyntax);
    assert_eq!(err.offset, 6);
}

#[test]
fn test_labels() {
    // label text is never taken as commands
    let cmds = parse_all("LBPD1,2\u{3}PU5,5;");
    assert_eq!(cmds.len(), 2);
    assert_eq!(args(&cmds[0]), ["PD1,2"]);
    assert_eq!(cmds[1].mnemonic, "PU");

    // unterminated label runs to the end
    let cmds = parse_all("LBhello PD1,1");
    assert_eq!(cmds.len(), 1);
    assert_eq!(args(&cmds[0]), ["hello PD1,1"]);

    // DT; resets the terminator to ETX
    assert_eq!(mnemonics("DT*;LBx*DT;LBy*z\u{3}PU;"), ["DT", "LB", "DT", "LB", "PU"]);
    assert_eq!(args(&parse_all("DT*;LBx*DT;LBy*z\u{3}PU;")[3]), ["y*z"]);

    // terminator with mode parameter
    let cmds = parse_all("DT#,1;LBa#PU");
    assert_eq!(args(&cmds[0]), ["#", "1"]);
    assert_eq!(cmds[0].raw, "#,1");
    assert_eq!(args(&cmds[1]), ["a"]);
    assert_eq!(cmds[2].mnemonic, "PU");
}

#[test]
fn test_restart() {
    let src = "DT*;LBa*PU1,1;";
    assert_eq!(mnemonics(src), ["DT", "LB", "PU"]);
    // a new iterator starts again with ETX as terminator
    assert_eq!(mnemonics("LBa*PU1,1;"), ["LB"]);
}

#[test]
fn test_invalid() {
    for snippet in &[
        "...",          // no mnemonic at all
        "...PD0,0;",    // garbage before the first command
        "PU;1,2",       // arguments without a mnemonic
        "P",            // incomplete mnemonic
        "P1,2",         // one-letter mnemonic
        "PU;$",         // invalid characters
        "1PD",          // number before first command
    ] {
        let err = parse::commands(snippet).find_map(Result::err).unwrap();
        assert_eq!(err.kind, ErrorKind::UnrecognizedSyntax, "{}", snippet);
    }
}

#[test]
fn test_invalid_position() {
    let mut cmds = parse::commands("PU;\n  ...PD0,0;PD1,1");
    assert!(cmds.next().unwrap().is_ok());
    let err = cmds.next().unwrap().unwrap_err();
    assert_eq!(err.raw, "...PD0,0");
    assert_eq!(err.offset, 6);
    assert_eq!(err.command, 1);
    assert_eq!(err.line_col("PU;\n  ...PD0,0;PD1,1"), (2, 3));
    assert_eq!(err.to_string(), "unrecognized syntax `...PD0,0` in command 1 at byte 6");
    // nothing after the first error
    assert!(cmds.next().is_none());
}

#[test]
fn test_number() {
    let strict = ParseOptions::default();
    for (text, value) in &[("12", 12.), ("-3", -3.), ("+4.", 4.), ("12.5", 12.5), ("007", 7.)] {
        assert_eq!(parse::number(text, &strict), Some(*value), "{}", text);
    }
    for text in &["", ".1", "1e3", "12.5.7", "--1", "a", "1 2", "inf"] {
        assert_eq!(parse::number(text, &strict), None, "{}", text);
    }

    let lenient = ParseOptions { lenient_numbers: true };
    assert_eq!(parse::number(".5", &lenient), Some(0.5));
    assert_eq!(parse::number("1e3", &lenient), Some(1000.));
    assert_eq!(parse::number("inf", &lenient), None);
    assert_eq!(parse::number("NaN", &lenient), None);
    assert_eq!(parse::number("", &lenient), None);

    // digit strings beyond the f64 range are not numbers in either mode
    let huge = "9".repeat(400);
    assert_eq!(parse::number(&huge, &strict), None);
    assert_eq!(parse::number(&format!("-{}", huge), &strict), None);
    assert_eq!(parse::number(&huge, &lenient), None);
}
