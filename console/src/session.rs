//! Interactive navigation over any line-based input and text output.
//!
//! Each route selection starts a fresh render pass; nothing carries over
//! between selections. End of input ends the session at whatever prompt it
//! occurs.

use std::io::{BufRead, Write};

use customer_core::CustomerForm;

use crate::api::ApiClient;
use crate::error::Result;
use crate::render::Page;
use crate::router::Route;
use crate::transport::Transport;
use crate::views;

pub struct Session<'a, T, R, W> {
    api: &'a ApiClient<T>,
    input: R,
    output: W,
}

impl<'a, T, R, W> Session<'a, T, R, W>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    pub fn new(api: &'a ApiClient<T>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures; API failures are rendered.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_menu()?;
            let Some(selection) = self.prompt("Navigate to")? else {
                return Ok(());
            };
            if matches!(selection.trim(), "q" | "quit" | "exit") {
                return Ok(());
            }
            match Route::from_selection(&selection) {
                Some(route) => {
                    if !self.enter(route)? {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "Unknown selection: {}", selection.trim())?,
            }
        }
    }

    /// Returns `false` when input ran out mid-route.
    fn enter(&mut self, route: Route) -> Result<bool> {
        tracing::debug!(route = route.name(), "entering route");
        match route {
            Route::Home => {
                let page = views::home(self.api);
                self.show(&page)?;
            }
            Route::List => loop {
                let page = views::list(self.api);
                self.show(&page)?;
                match self.prompt("[r] refresh, [enter] back")? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("r") => continue,
                    Some(_) => break,
                    None => return Ok(false),
                }
            },
            Route::Create => {
                self.show(&views::create_form())?;
                let Some(form) = self.read_form()? else {
                    return Ok(false);
                };
                let page = views::create(self.api, &form);
                self.show(&page)?;
            }
            Route::Find => {
                let Some(id) = self.read_id("Customer ID")? else {
                    return Ok(false);
                };
                let page = views::find(self.api, id);
                self.show(&page)?;
            }
            Route::Delete => {
                self.show(&views::delete_warning())?;
                let Some(id) = self.read_id("ID of the customer to delete")? else {
                    return Ok(false);
                };
                let page = views::delete(self.api, id);
                self.show(&page)?;
            }
        }
        Ok(true)
    }

    fn read_form(&mut self) -> Result<Option<CustomerForm>> {
        let Some(first_name) = self.prompt("First name *")? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt("Last name *")? else {
            return Ok(None);
        };
        let Some(email) = self.prompt("Email *")? else {
            return Ok(None);
        };
        Ok(Some(CustomerForm::new(first_name, last_name, email)))
    }

    /// Re-prompts until the input is a valid ID.
    fn read_id(&mut self, label: &str) -> Result<Option<u64>> {
        let label = format!("{label} (min {})", views::DEFAULT_CUSTOMER_ID);
        loop {
            let Some(raw) = self.prompt(&label)? else {
                return Ok(None);
            };
            match views::parse_customer_id(&raw) {
                Ok(id) => return Ok(Some(id)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Navigation")?;
        for (index, route) in Route::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, route.label())?;
        }
        writeln!(self.output, "  q. Quit")?;
        Ok(())
    }

    fn show(&mut self, page: &Page) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{page}")?;
        write_footer(&mut self.output, self.api.base_url())?;
        Ok(())
    }

    /// Read one line without its line terminator; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// The read-only base URL line shown under every page.
pub fn write_footer<W: Write>(output: &mut W, base_url: &str) -> std::io::Result<()> {
    writeln!(output, "----------------------------------------")?;
    writeln!(output, "API: {base_url}")
}
