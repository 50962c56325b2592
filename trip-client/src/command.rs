//! Line commands for the terminal host.
//!
//! Each line of input becomes one [`Event`]:
//!
//! ```text
//! click <lat> <lon>              select a point on the map
//! search <field> <text>          type into a search field
//! pick <field> <n>               choose suggestion n (from 1)
//! focus <field>                  pointer down inside a search field
//! dismiss                        pointer down away from both fields
//! locate <lat> <lon>             device position found
//! locate denied                  device position refused
//! clear <field>                  empty a slot
//! mode <transit|walk|drive>      choose the travel mode
//! route                          request a route
//! satellite                      toggle satellite tiles
//! tilt                           toggle the 3D tilt
//! quit                           stop the client
//! ```
//!
//! `<field>` is `origin` (or `from`) or `destination` (or `to`).

use crate::app::Event;
use crate::domain::{DomainError, GeoPoint, Slot, TravelMode};
use crate::session::GeolocationError;

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command}: missing {what}")]
    Missing {
        command: &'static str,
        what: &'static str,
    },

    #[error("{command}: invalid {what} {value:?}")]
    Invalid {
        command: &'static str,
        what: &'static str,
        value: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Event, CommandError> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, r)| (c, r.trim()));

    match command.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "click" => Ok(Event::MapClicked(parse_point("click", rest)?)),
        "search" => {
            let (field, text) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(f, t)| (f, t.trim()));
            Ok(Event::SearchInput {
                field: parse_field("search", field)?,
                text: text.to_string(),
            })
        }
        "pick" => {
            let mut args = rest.split_whitespace();
            let field = parse_field("pick", args.next().unwrap_or(""))?;
            let n = args.next().ok_or(CommandError::Missing {
                command: "pick",
                what: "suggestion number",
            })?;
            let index = n
                .parse::<usize>()
                .ok()
                .and_then(suggestion_index)
                .ok_or_else(|| CommandError::Invalid {
                    command: "pick",
                    what: "suggestion number",
                    value: n.to_string(),
                })?;
            Ok(Event::SuggestionPicked { field, index })
        }
        "focus" => Ok(Event::PointerDown {
            inside: Some(parse_field("focus", rest)?),
        }),
        "dismiss" => Ok(Event::PointerDown { inside: None }),
        "locate" => match rest {
            "denied" => Ok(Event::Geolocated(Err(GeolocationError::Denied))),
            "unavailable" => Ok(Event::Geolocated(Err(GeolocationError::Unavailable))),
            _ => Ok(Event::Geolocated(Ok(parse_point("locate", rest)?))),
        },
        "clear" => Ok(Event::ClearSlot(parse_field("clear", rest)?)),
        "mode" => {
            if rest.is_empty() {
                return Err(CommandError::Missing {
                    command: "mode",
                    what: "travel mode",
                });
            }
            Ok(Event::ModeSelected(rest.parse::<TravelMode>()?))
        }
        "route" => Ok(Event::FindRoute),
        "satellite" => Ok(Event::ToggleSatellite),
        "tilt" => Ok(Event::ToggleTilt),
        "quit" | "exit" => Ok(Event::Shutdown),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Number shown for the suggestion at `index`, as typed back to `pick`.
pub fn suggestion_number(index: usize) -> usize {
    index + 1
}

fn suggestion_index(number: usize) -> Option<usize> {
    number.checked_sub(1)
}

fn parse_field(command: &'static str, arg: &str) -> Result<Slot, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::Missing {
            command,
            what: "field",
        });
    }
    Ok(arg.parse::<Slot>()?)
}

fn parse_point(command: &'static str, args: &str) -> Result<GeoPoint, CommandError> {
    let mut parts = args.split([' ', ',']).filter(|s| !s.is_empty());
    let mut coordinate = |what: &'static str| -> Result<f64, CommandError> {
        let raw = parts.next().ok_or(CommandError::Missing { command, what })?;
        raw.parse().map_err(|_| CommandError::Invalid {
            command,
            what,
            value: raw.to_string(),
        })
    };

    let lat = coordinate("latitude")?;
    let lon = coordinate("longitude")?;
    Ok(GeoPoint::new(lat, lon)?)
}
