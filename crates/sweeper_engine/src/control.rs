use std::io::BufRead;
use std::thread;

use sweeper_core::ControlCommand;
use tokio::sync::mpsc;

/// Forwards non-empty lines from `reader` to the filter loop.
///
/// Runs on its own thread because reads block. The thread exits after
/// forwarding a quit line, at end of input, on a read error, or once the
/// receiver is gone; the sender is dropped on exit, closing the channel.
/// Bytes that are not valid UTF-8 are replaced, never fatal.
///
/// Logs through plain `log` macros: this thread has no scan tick.
pub fn spawn_control_reader<R>(mut reader: R, tx: mpsc::Sender<String>) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::warn!("Control input read failed: {}", err);
                    break;
                }
            }

            let line = decode_line(&buf);
            if line.is_empty() {
                continue;
            }

            let quit = ControlCommand::is_quit(&line);
            if tx.blocking_send(line).is_err() {
                break;
            }
            if quit {
                break;
            }
        }
        log::debug!("Control input closed");
    })
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
