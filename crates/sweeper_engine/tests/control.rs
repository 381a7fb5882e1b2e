use std::io::Cursor;

use pretty_assertions::assert_eq;
use sweeper_engine::spawn_control_reader;
use tokio::sync::mpsc;

fn collect(input: &str) -> Vec<String> {
    let (tx, mut rx) = mpsc::channel(1);
    let reader = spawn_control_reader(Cursor::new(input.to_string()), tx);

    let mut lines = Vec::new();
    while let Some(line) = rx.blocking_recv() {
        lines.push(line);
    }
    reader.join().unwrap();
    lines
}

#[test]
fn forwards_non_empty_lines_until_quit() {
    let lines = collect("cAcme\n\nlRemote\r\nquit\ntIgnored\n");

    assert_eq!(lines, vec!["cAcme", "lRemote", "quit"]);
}

#[test]
fn end_of_input_closes_channel() {
    let lines = collect("tJunior\n\n");

    assert_eq!(lines, vec!["tJunior"]);
}

#[test]
fn stops_when_receiver_is_gone() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);

    let reader = spawn_control_reader(Cursor::new("cAcme\ncGlobex\n".to_string()), tx);

    reader.join().unwrap();
}

#[test]
fn invalid_utf8_line_does_not_stop_input() {
    let (tx, mut rx) = mpsc::channel(1);
    let input: &[u8] = b"lK\xf6ln\ntJunior\n";
    let reader = spawn_control_reader(Cursor::new(input.to_vec()), tx);

    let mut lines = Vec::new();
    while let Some(line) = rx.blocking_recv() {
        lines.push(line);
    }
    reader.join().unwrap();

    assert_eq!(lines, vec!["lK\u{fffd}ln", "tJunior"]);
}

#[test]
fn last_line_without_newline_is_forwarded() {
    let lines = collect("cAcme\r\ntIntern");

    assert_eq!(lines, vec!["cAcme", "tIntern"]);
}
