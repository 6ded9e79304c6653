use std::env;
use std::io::Write;

use dotenvy::dotenv;
use order_client::{render, CheckoutService, HttpOrderApi, OrderApi};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands:
  add <id>       add one of a menu item to the order
  remove <id>    drop an item from the order
  qty <id> <n>   set an item's quantity (0 removes it)
  menu           show the menu again
  cart           show the current order
  order          place the order
  quit           leave";

enum Command {
    Add(i64),
    Remove(i64),
    Quantity(i64, u32),
    Menu,
    ShowCart,
    Order,
    Help,
    Quit,
    Unknown,
}

impl Command {
    fn parse(s: &str) -> Self {
        let mut parts = s.split_whitespace();
        match parts.next() {
            Some("add") => match parts.next().and_then(|a| a.parse().ok()) {
                Some(id) => Self::Add(id),
                None => Self::Unknown,
            },
            Some("remove") | Some("rm") => match parts.next().and_then(|a| a.parse().ok()) {
                Some(id) => Self::Remove(id),
                None => Self::Unknown,
            },
            Some("qty") => {
                let id = parts.next().and_then(|a| a.parse().ok());
                let quantity = parts.next().and_then(|a| a.parse().ok());
                match (id, quantity) {
                    (Some(id), Some(quantity)) => Self::Quantity(id, quantity),
                    _ => Self::Unknown,
                }
            }
            Some("menu") => Self::Menu,
            Some("cart") => Self::ShowCart,
            Some("order") => Self::Order,
            Some("help") => Self::Help,
            Some("quit") | Some("exit") => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let base_url =
        env::var("POS_API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    log::info!("Loading menu from {}", base_url);
    let api = HttpOrderApi::new(&base_url);
    let menu = match api.fetch_menu_items().await {
        Ok(items) => items,
        Err(err) => {
            log::error!("menu fetch failed: {}", err);
            eprintln!("Error loading menu items: {err}");
            std::process::exit(1);
        }
    };

    println!("{}", render::menu(&menu));
    println!("{HELP}");

    let mut checkout = CheckoutService::new(api);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Command::Add(id) => match menu.iter().find(|m| m.id == id) {
                Some(item) => {
                    checkout.add(item);
                    println!("{}", render::cart(checkout.cart()));
                }
                None => println!("No menu item with id {id}."),
            },
            Command::Remove(id) => {
                checkout.remove(id);
                println!("{}", render::cart(checkout.cart()));
            }
            Command::Quantity(id, quantity) => {
                checkout.update_quantity(id, quantity);
                println!("{}", render::cart(checkout.cart()));
            }
            Command::Menu => println!("{}", render::menu(&menu)),
            Command::ShowCart => println!("{}", render::cart(checkout.cart())),
            Command::Order => {
                checkout.submit_order().await;
                if let Some(message) = render::status(&checkout.status()) {
                    println!("{message}");
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown => println!("Unrecognized command, try 'help'."),
        }
    }

    Ok(())
}
