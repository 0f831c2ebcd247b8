//! One shell per TCP connection.
//!
//! ```text
//! cargo run --example telnet_server --features std -- 2323
//! telnet localhost 2323
//! ```
//!
//! Every connection gets its own thread, transport, history and parameter
//! storage; nothing is shared between sessions.

use core::cell::Cell;
use std::env;
use std::io;
use std::net::{TcpListener, TcpStream};
use std::thread;

use libshell::io::{StreamTransport, Transport};
use libshell::{CommandResult, Config, ParamValue, Shell, text_buffer};

const DEFAULT_PORT: u16 = 2323;

/// Per-connection state reachable from command handlers.
#[derive(Debug)]
struct Session {
    id: usize,
    commands_run: u32,
}

type TelnetShell<'a> = Shell<'a, StreamTransport<TcpStream, TcpStream>, Session>;

fn whoami(shell: &mut TelnetShell<'_>, _args: &[&str]) -> CommandResult {
    let session = shell.context_mut();
    session.commands_run += 1;
    let line = format!("session {} ({} whoami calls)", session.id, session.commands_run);
    shell.println(&line);
    Ok(())
}

fn echo<T: Transport, C>(shell: &mut Shell<'_, T, C>, args: &[&str]) -> CommandResult {
    shell.println(&args[1..].join(" "));
    Ok(())
}

fn exit<T: Transport, C>(shell: &mut Shell<'_, T, C>, _args: &[&str]) -> CommandResult {
    shell.println("Goodbye");
    shell.stop();
    Ok(())
}

fn serve(stream: TcpStream, id: usize) -> io::Result<()> {
    let peer = stream.peer_addr()?;
    println!("[{}] connected from {}", id, peer);

    let transport = StreamTransport::tcp(stream)?;
    let config = Config {
        history_size: 20,
        prompt: "telnet> ",
        ..Config::default()
    };

    let counter = Cell::new(0);
    let temperature = Cell::new(25.5f32);
    let name = text_buffer::<64>("MyDevice");
    let enabled = Cell::new(true);

    let mut shell = Shell::with_context(transport, config, Session { id, commands_run: 0 })
        .map_err(|e| io::Error::other(e.to_string()))?;

    let setup = [
        shell.register_command("whoami", "Show this session", whoami),
        shell.register_command("echo", "Print the arguments", echo),
        shell.register_command("exit", "Close the connection", exit),
        shell.register_parameter("counter", ParamValue::Int(&counter)),
        shell.register_parameter("temperature", ParamValue::Float(&temperature)),
        shell.register_parameter("name", ParamValue::Text(&name)),
        shell.register_parameter("enabled", ParamValue::Bool(&enabled)),
    ];
    if let Some(Err(e)) = setup.into_iter().find(Result::is_err) {
        return Err(io::Error::other(e.to_string()));
    }

    shell.println("Welcome. Type 'help' for available commands.");
    let result = shell.run();
    println!("[{}] disconnected: {:?}", id, result);
    Ok(())
}

fn main() -> io::Result<()> {
    let port = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = TcpListener::bind(("0.0.0.0", port))?;
    println!("Listening on port {}", port);
    println!("Connect with: telnet localhost {}", port);

    for (id, stream) in listener.incoming().enumerate() {
        match stream {
            Ok(stream) => {
                thread::spawn(move || {
                    if let Err(e) = serve(stream, id) {
                        eprintln!("[{}] session error: {}", id, e);
                    }
                });
            }
            Err(e) => eprintln!("accept failed: {}", e),
        }
    }
    Ok(())
}
