//! The interactive menu loop.

use log::{debug, warn};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::bridge::Bridge;
use crate::console::{Banner, Console};
use crate::discovery::BridgeLocator;
use crate::errors::Error;
use crate::light::Light;
use crate::provision;
use crate::session::Session;
use crate::settings::Settings;
use crate::store::CredentialStore;
use crate::types::Brightness;

type Result<T> = std::result::Result<T, Error>;

const TABLE_TOP: &str = "╭──────┬──────────────┬───────────┬───────╮";
const TABLE_HEADER: &str = "│  ID  │     Name     │   Status  │  Hue  │";
const TABLE_RULE: &str = "├──────┼──────────────┼───────────┼───────┤";
const TABLE_BOTTOM: &str = "╰──────┴──────────────┴───────────┴───────╯";

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Command {
    ListLights = 1,
    TurnOn = 2,
    TurnOff = 3,
    Exit = 4,
}

impl Command {
    /// Parse the operator's answer to the command prompt.
    pub fn parse(input: &str) -> Option<Self> {
        let key: u8 = input.trim().parse().ok()?;
        Command::iter().find(|command| command.key() == key)
    }

    pub fn key(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::ListLights => "List all lights",
            Command::TurnOn => "Turn on light",
            Command::TurnOff => "Turn off light",
            Command::Exit => "Exit",
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The menu loop and the state it carries between commands.
///
/// Each command locates the bridge and provisions a session afresh; only the
/// credential is carried over.
pub struct Menu<S, C> {
    locator: BridgeLocator,
    credential: Option<String>,
    store: S,
    console: C,
}

impl<S: CredentialStore, C: Console> Menu<S, C> {
    /// The process environment's credential wins over the stored one.
    pub fn new(settings: Settings, store: S, console: C) -> Self {
        let credential = settings.username.or_else(|| {
            store.load().unwrap_or_else(|e| {
                warn!("could not load stored username: {e}");
                None
            })
        });
        Menu {
            locator: BridgeLocator::new(settings.bridge_ip, &settings.discovery_url),
            credential,
            store,
            console,
        }
    }

    /// The credential the next command will try first.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run until the operator exits or input ends.
    pub async fn run(&mut self) {
        while self.step().await == Flow::Continue {}
    }

    /// Show the menu, read one command and carry it out.
    pub async fn step(&mut self) -> Flow {
        self.show_menu();
        let Some(answer) = self.console.read_line("Command » ") else {
            debug!("input closed, leaving menu");
            return Flow::Exit;
        };

        match self.dispatch(&answer).await {
            Ok(flow) => flow,
            Err(e) => {
                self.console.error(&format!("Unexpected error: {e}"));
                self.console.pause();
                Flow::Continue
            }
        }
    }

    async fn dispatch(&mut self, answer: &str) -> Result<Flow> {
        let Some(command) = Command::parse(answer) else {
            self.console.print("Invalid option");
            self.console.pause();
            return Ok(Flow::Continue);
        };

        match command {
            Command::ListLights => {
                self.console.banner(Banner::Lights);
                self.list_lights().await?;
            }
            Command::TurnOn => {
                self.console.banner(Banner::TurnOn);
                if let Some(id) = self.console.read_line("Enter the light ID to turn on: ") {
                    self.turn_on(&id).await?;
                }
            }
            Command::TurnOff => {
                self.console.banner(Banner::TurnOff);
                if let Some(id) = self.console.read_line("Enter the light ID to turn off: ") {
                    self.turn_off(&id).await?;
                }
            }
            Command::Exit => {
                self.console.banner(Banner::Goodbye);
                self.console.print("Exiting...");
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) {
        self.console.banner(Banner::Menu);
        let items: Vec<String> = Command::iter()
            .map(|command| format!("{}. {}", command.key(), command.label()))
            .collect();
        let width = items.iter().map(|item| item.chars().count()).max().unwrap_or(0) + 3;
        self.console.print(&format!("┌{}┐", "─".repeat(width)));
        for item in items {
            self.console.print(&format!("│ {item:<pad$}│", pad = width - 1));
        }
        self.console.print(&format!("└{}┘", "─".repeat(width)));
    }

    /// Locate the bridge and open a session, keeping any new credential.
    async fn session(&mut self) -> Result<Session> {
        let address = self.locator.locate().await?;
        let bridge = Bridge::new(&address);
        let provisioned = provision::connect(
            &bridge,
            &mut self.credential,
            &mut self.store,
            &mut self.console,
        )
        .await?;
        Ok(provisioned.session)
    }

    async fn list_lights(&mut self) -> Result<()> {
        let lights = self.session().await?.lights().await?;
        self.console.print(TABLE_TOP);
        self.console.print(TABLE_HEADER);
        self.console.print(TABLE_RULE);
        for light in &lights {
            self.console.print(&table_row(light));
        }
        self.console.print(TABLE_BOTTOM);
        self.console.pause();
        Ok(())
    }

    async fn turn_on(&mut self, input: &str) -> Result<()> {
        let session = self.session().await?;
        let outcome = match parse_light_id(input) {
            Ok(id) => session.set_light_on(id, &Brightness::new()).await.map(|_| id),
            Err(e) => Err(e),
        };
        self.report(outcome, "on")
    }

    async fn turn_off(&mut self, input: &str) -> Result<()> {
        let session = self.session().await?;
        let outcome = match parse_light_id(input) {
            Ok(id) => session.set_light_off(id).await.map(|_| id),
            Err(e) => Err(e),
        };
        self.report(outcome, "off")
    }

    fn report(&mut self, outcome: Result<u32>, state: &str) -> Result<()> {
        match outcome {
            Ok(id) => self.console.print(&format!("Light {id} turned {state}")),
            Err(Error::InvalidLightId(id)) => {
                self.console.error(&format!("Invalid light ID: {id}"));
            }
            Err(Error::InvalidLightIdString(input)) => {
                self.console.error(&format!("Invalid light ID: {input}"));
            }
            Err(e) => return Err(e),
        }
        self.console.pause();
        Ok(())
    }
}

fn parse_light_id(input: &str) -> Result<u32> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| Error::InvalidLightIdString(input.to_string()))
}

fn table_row(light: &Light) -> String {
    let hue = light
        .state()
        .hue()
        .map_or_else(|| "-".to_string(), |hue| hue.to_string());
    let name: String = light.name().chars().take(12).collect();
    format!(
        "│ {:^4} │ {:<12} │ {:<9} │ {:<5} │",
        light.id(),
        name,
        light.state().on(),
        hue
    )
}
