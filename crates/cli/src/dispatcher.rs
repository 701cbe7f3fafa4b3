//! Routes menu choices to inventory and ledger operations.
//!
//! Each command runs to completion before the next choice is read. Bad input
//! is handled by reprompting; domain rejections are reported as status lines.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDateTime};

use stockroom_auth::{authorize, Role, Session};
use stockroom_core::Money;
use stockroom_inventory::{AddOutcome, CatalogEntry};
use stockroom_sales::SaleError;

use crate::console::Console;
use crate::context::AppContext;
use crate::menu::{self, Command};

const INVALID_PRODUCT_INPUT: &str = "Invalid input. Please enter valid price and quantity.";
const INVALID_QUANTITY: &str = "Invalid quantity. Please enter a whole number.";

/// Whether the session keeps going after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Ask for a username and role until the role is valid.
///
/// Returns `Ok(None)` if the input ends before a session is established.
pub fn login<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<Session>> {
    loop {
        let Some(username) = console.prompt("Enter your username: ")? else {
            return Ok(None);
        };
        let Some(raw_role) = console.prompt("Enter role (admin/customer): ")? else {
            return Ok(None);
        };

        match raw_role.parse::<Role>() {
            Ok(role) => return Ok(Some(Session::new(username.trim(), role))),
            Err(e) => {
                tracing::debug!(error = %e, "login rejected");
                console.say("Invalid role. Please enter 'admin' or 'customer'.")?;
            }
        }
    }
}

/// Menu loop for one logged-in session.
pub struct Dispatcher<'a> {
    ctx: &'a mut AppContext,
    session: Session,
    clock: fn() -> NaiveDateTime,
}

impl<'a> Dispatcher<'a> {
    pub fn new(ctx: &'a mut AppContext, session: Session) -> Self {
        Self::with_clock(ctx, session, local_now)
    }

    /// Use `clock` to timestamp sales instead of the local wall clock.
    pub fn with_clock(ctx: &'a mut AppContext, session: Session, clock: fn() -> NaiveDateTime) -> Self {
        Self { ctx, session, clock }
    }

    /// Show the role's menu and execute choices until the user exits or the
    /// input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        let role = self.session.role();
        tracing::info!(username = self.session.username(), role = %role, "session started");

        loop {
            for item in menu::menu_for(role) {
                console.say(format_args!("{}. {}", item.key, item.label))?;
            }
            let Some(choice) = console.prompt("Select an option: ")? else {
                break;
            };

            let Some(command) = menu::resolve(role, &choice) else {
                console.say("Invalid option, try again.")?;
                continue;
            };

            if let Some(permission) = command.required_permission() {
                if let Err(e) = authorize(&self.session, &permission) {
                    console.say(format_args!("Not permitted: {e}"))?;
                    continue;
                }
            }

            if self.execute(command, console)? == Flow::Exit {
                break;
            }
        }

        tracing::info!(username = self.session.username(), "session ended");
        Ok(())
    }

    fn execute<R: BufRead, W: Write>(&mut self, command: Command, console: &mut Console<R, W>) -> io::Result<Flow> {
        match command {
            Command::AddProduct => self.add_product(console),
            Command::RemoveProduct => self.remove_product(console),
            Command::UpdateStock => self.update_stock(console),
            Command::ViewInventory => self.view_inventory(console).map(|_| Flow::Continue),
            Command::ViewTotalValue => {
                console.say(format_args!("Total inventory value: {}", self.ctx.store.total_value()))?;
                Ok(Flow::Continue)
            }
            Command::ViewSalesLog => self.view_sales_log(console).map(|_| Flow::Continue),
            Command::BuyProduct => self.buy_product(console),
            Command::Exit => {
                console.say(format_args!("Goodbye, {}.", self.session.username()))?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add_product<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<Flow> {
        let entry = loop {
            let Some(id) = console.prompt("Enter product ID: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(name) = console.prompt("Enter product name: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(raw_price) = console.prompt("Enter product price: ")? else {
                return Ok(Flow::Exit);
            };
            let price = match raw_price.parse::<Money>() {
                Ok(price) => price,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected product price");
                    console.say(INVALID_PRODUCT_INPUT)?;
                    continue;
                }
            };
            let Some(raw_quantity) = console.prompt("Enter product quantity: ")? else {
                return Ok(Flow::Exit);
            };
            let Ok(quantity) = raw_quantity.trim().parse::<i64>() else {
                console.say(INVALID_PRODUCT_INPUT)?;
                continue;
            };

            break CatalogEntry::new(id.trim(), name.trim(), price, quantity);
        };

        let id = entry.id_typed().clone();
        match self.ctx.store.add_or_merge(entry) {
            AddOutcome::Inserted => console.say(format_args!("Product '{id}' added."))?,
            AddOutcome::Merged => {
                console.say(format_args!("Product '{id}' already exists; quantity added to stock."))?
            }
        }
        Ok(Flow::Continue)
    }

    fn remove_product<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<Flow> {
        let Some(id) = console.prompt("Enter product ID to remove: ")? else {
            return Ok(Flow::Exit);
        };
        // Unknown ids are ignored silently.
        if let Some(removed) = self.ctx.store.remove(id.trim()) {
            console.say(format_args!("Product '{}' removed.", removed.id_typed()))?;
        }
        Ok(Flow::Continue)
    }

    fn update_stock<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<Flow> {
        let Some(id) = console.prompt("Enter product ID to update stock: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(delta) = console.prompt_parsed::<i64>("Enter quantity to add or subtract: ", INVALID_QUANTITY)? else {
            return Ok(Flow::Exit);
        };

        let id = id.trim();
        if self.ctx.store.adjust_quantity(id, delta) {
            if let Some(entry) = self.ctx.store.get(id) {
                console.say(format_args!(
                    "Stock for '{id}' is now {}.",
                    entry.quantity_on_hand()
                ))?;
            }
        } else {
            console.say(format_args!("Product '{id}' not found."))?;
        }
        Ok(Flow::Continue)
    }

    fn view_inventory<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        if self.ctx.store.is_empty() {
            return console.say("No products in inventory.");
        }
        for entry in self.ctx.store.list_all() {
            console.say(format_args!(
                "ID: {}, Name: {}, Price: {}, Quantity: {}",
                entry.id_typed(),
                entry.name(),
                entry.unit_price(),
                entry.quantity_on_hand()
            ))?;
        }
        Ok(())
    }

    fn view_sales_log<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        let log = self.ctx.ledger.sales_log();
        if log.is_empty() {
            return console.say("No sales have been made yet.");
        }
        for sale in log {
            console.say(format_args!(
                "Product ID: {}, Name: {}, Quantity Sold: {}, Total: {}, Date: {}",
                sale.product_id,
                sale.product_name,
                sale.quantity_sold,
                sale.total_cost,
                sale.formatted_timestamp()
            ))?;
        }
        console.say(format_args!("Total revenue: {}", self.ctx.ledger.total_revenue()))
    }

    fn buy_product<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<Flow> {
        let Some(id) = console.prompt("Enter product ID to buy: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = console.prompt_parsed::<i64>("Enter quantity to buy: ", INVALID_QUANTITY)? else {
            return Ok(Flow::Exit);
        };

        let AppContext { store, ledger } = &mut *self.ctx;
        match ledger.sell(store, id.trim(), quantity, (self.clock)()) {
            Ok(cost) => console.say(format_args!("Purchased {quantity} units. Total cost: {cost}"))?,
            Err(SaleError::InsufficientStock { .. }) => console.say("Not enough stock available.")?,
            Err(SaleError::UnknownProduct(id)) => console.say(format_args!("Product '{id}' not found."))?,
            Err(SaleError::NonPositiveQuantity(_)) => console.say("Quantity must be positive.")?,
        }
        Ok(Flow::Continue)
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
