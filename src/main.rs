use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use poseverify::adapters::ConsoleConfirmer;
use poseverify::app::App;
use poseverify::cli::{parse_args, version_line, CliCommand, ConsoleCommand, HELP};
use poseverify::cli_output::{render_modal, render_view};
use poseverify::models::StagedFile;
use poseverify::startup::{build_gateway, init_tracing, ClientConfig};
use poseverify::view_state::SurfaceCaps;

type InputLines = Lines<BufReader<Stdin>>;

fn prompt() {
    print!("> ");
    std::io::stdout().flush().ok();
}

fn print_alerts(app: &mut App) {
    while let Some(alert) = app.take_alert() {
        println!("  ✗ {}", alert);
    }
}

async fn load_files(paths: &[PathBuf]) -> Vec<StagedFile> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match StagedFile::from_path(path).await {
            Ok(file) => files.push(file),
            Err(e) => println!("  ✗ {}: {}", path.display(), e),
        }
    }
    files
}

/// Ask the question on the console and arm the confirmer with the reply.
async fn ask(
    lines: &mut InputLines,
    confirmer: &ConsoleConfirmer,
    question: &str,
) -> Result<()> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush().ok();
    let reply = lines.next_line().await?.unwrap_or_default();
    confirmer.answer_next(ConsoleConfirmer::parse_reply(&reply));
    Ok(())
}

/// Run one console command. Returns `false` when the user quits.
async fn run_command(
    app: &mut App,
    command: ConsoleCommand,
    lines: &mut InputLines,
    confirmer: &ConsoleConfirmer,
) -> Result<bool> {
    if let Some(question) = command.confirmation() {
        ask(lines, confirmer, question.message()).await?;
    }

    let outcome = match command {
        ConsoleCommand::Movement(movement) => {
            app.set_movement(movement);
            Ok(())
        }
        ConsoleCommand::Mode(mode) => {
            app.set_mode(mode);
            Ok(())
        }
        ConsoleCommand::Select(path) => match StagedFile::from_path(&path).await {
            Ok(file) => app.select_file(file),
            Err(e) => {
                println!("  ✗ {}: {}", path.display(), e);
                Ok(())
            }
        },
        ConsoleCommand::Verify => app.verify(),
        ConsoleCommand::Instant => app.instant_verify(),
        ConsoleCommand::Reset => {
            app.reset();
            Ok(())
        }
        ConsoleCommand::Result => app.open_result_modal(),
        ConsoleCommand::UploadRefs(paths) => {
            let files = load_files(&paths).await;
            if files.is_empty() {
                println!("  • No files to upload");
            } else if !app.upload_references(files) {
                println!("  • A reference upload is already in progress");
            }
            Ok(())
        }
        ConsoleCommand::ShowRef(id) => app.open_reference_modal(id),
        ConsoleCommand::DeleteRef(id) => app.delete_reference(id),
        ConsoleCommand::ReloadHistory => {
            app.reload_history();
            Ok(())
        }
        ConsoleCommand::ShowHistory(id) => app.open_history_modal(id),
        ConsoleCommand::DeleteHistory(id) => {
            app.delete_history_item(id);
            Ok(())
        }
        ConsoleCommand::ClearHistory => app.clear_history(),
        ConsoleCommand::Close => {
            app.close_modal();
            Ok(())
        }
        ConsoleCommand::Show => {
            print!("{}", render_view(&app.view(SurfaceCaps::default())));
            Ok(())
        }
        ConsoleCommand::Help => {
            println!("{}", HELP);
            Ok(())
        }
        ConsoleCommand::Quit => return Ok(false),
    };

    if let Err(e) = outcome {
        println!("  ✗ {}", e);
    } else if let Some(modal) = app.view(SurfaceCaps::default()).modal {
        print!("{}", render_modal(&modal));
    }
    Ok(true)
}

async fn run(config: ClientConfig) -> Result<()> {
    let gateway = build_gateway(&config)?;
    tracing::info!(base_url = %config.base_url, "Starting console client");

    let confirmer = Arc::new(ConsoleConfirmer::new());
    let mut app = App::new(config, gateway, confirmer.clone());
    app.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", version_line());
    println!("Type `help` for commands.");
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !line.trim().is_empty() {
                    match line.parse::<ConsoleCommand>() {
                        Ok(command) => {
                            if !run_command(&mut app, command, &mut lines, &confirmer).await? {
                                break;
                            }
                        }
                        Err(e) => println!("  ✗ {}", e),
                    }
                }
                print_alerts(&mut app);
                prompt();
            }
            _ = app.process_next() => {
                print_alerts(&mut app);
            }
        }
    }

    app.shutdown().await;
    Ok(())
}

fn main() -> Result<()> {
    let base_url = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("Usage: poseverify [--url <backend>]\n\n{}", HELP);
            return Ok(());
        }
        CliCommand::Run { base_url } => base_url,
    };

    color_eyre::install()?;
    init_tracing();

    let mut config = ClientConfig::from_env();
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}
