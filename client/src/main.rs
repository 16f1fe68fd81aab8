//! # Bank Client
//!
//! Line-oriented driver for the client. Reads commands from stdin, prints the
//! current screen and any notices. Logs go to the log file, not stdout.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use bank_client::app::{CardOperationForm, SignInForm, SignUpForm, TransferForm};
use bank_client::services::ApiClient;
use bank_client::storage::FileStore;
use bank_client::{App, AppError, ClientConfig, NoticeLevel, SessionStore, View};

const HELP: &str = "\
Commands:
  go <path>                                   navigate (/, /balance, /deposit, /withdraw, /transfer, /auth/signin, /auth/signup)
  back                                        previous screen
  signin <card> <pin>
  signup <first> <last> <phone> <card> <pin> <VISA|MASTERCARD> [balance]
  deposit <pin> <amount>
  withdraw <pin> <amount>
  transfer <pin> <amount> <card> <VISA|MASTERCARD>
  balance                                     show cached balance
  logout
  help
  quit";

#[tokio::main]
async fn main() -> bank_client::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = bank_client::debug::init_logger();

    let config = ClientConfig::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        storage = %config.storage_file.display(),
        timeout_secs = config.request_timeout.as_secs(),
        funds_check = %config.funds_check,
        "Starting bank client"
    );

    let storage = Arc::new(FileStore::new(config.storage_file.clone()));
    let store = Arc::new(SessionStore::new(storage));
    let api = Arc::new(ApiClient::new(&config)?);
    let app = App::new(store, api, config.funds_check);

    app.bootstrap();
    render(&app);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = lines.next_line().await.map_err(|e| AppError::Config(format!("stdin: {}", e)))? else {
            break;
        };

        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = args.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            _ => {
                if let Err(e) = run(&app, command, rest).await {
                    if !e.is_notice() {
                        println!("! {}", e);
                    }
                }
                render(&app);
            }
        }
    }

    tracing::info!("Bank client exiting");
    Ok(())
}

async fn run(app: &App, command: &str, args: &[&str]) -> bank_client::Result<()> {
    let arg = |i: usize| args.get(i).copied().unwrap_or_default().to_string();

    match command {
        "go" => {
            app.navigate(&arg(0));
        }
        "back" => {
            app.back();
        }
        "signin" => {
            app.navigate("/auth/signin");
            if !app.is_authenticated() {
                app.sign_in(SignInForm::new(arg(0), arg(1))).await?;
            }
        }
        "signup" => {
            app.navigate("/auth/signup");
            let form = SignUpForm {
                first_name: arg(0),
                last_name: arg(1),
                phone: arg(2),
                card_number: arg(3),
                pin: arg(4),
                payment_system: arg(5),
                balance: arg(6),
            };
            app.sign_up(form).await?;
        }
        "deposit" => {
            app.navigate("/deposit");
            app.deposit(CardOperationForm::new(arg(0), arg(1))).await?;
        }
        "withdraw" => {
            app.navigate("/withdraw");
            app.withdraw(CardOperationForm::new(arg(0), arg(1))).await?;
        }
        "transfer" => {
            app.navigate("/transfer");
            let form = TransferForm {
                pin: arg(0),
                amount: arg(1),
                destination_card: arg(2),
                destination_network: arg(3),
            };
            let outcome = app.transfer(form).await?;
            tracing::debug!(?outcome, "Transfer finished");
        }
        "balance" => {
            app.navigate("/balance");
            if app.is_authenticated() {
                println!("Balance: {}", app.balance()?);
            }
        }
        "logout" => app.logout()?,
        other => println!("Unknown command '{}'. Type 'help'.", other),
    }

    Ok(())
}

fn render(app: &App) {
    for notice in app.drain_notices() {
        let marker = match notice.level {
            NoticeLevel::Success => "+",
            NoticeLevel::Error => "x",
            NoticeLevel::Warning => "!",
        };
        println!("[{}] {}", marker, notice.message);
    }

    match app.view() {
        View::Loading => println!("-- Loading... --"),
        View::Screen(route) => match app.session() {
            Some(session) => println!(
                "-- {} ({}) -- {} | {} {}",
                route.title(),
                route.path(),
                session.full_name(),
                session.payment_system.label(),
                shared::last_four(&session.number_of_card)
            ),
            None => println!("-- {} ({}) --", route.title(), route.path()),
        },
    }
}
