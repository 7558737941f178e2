//! Pins command implementation

use crate::cli::output::{format_pins_json, format_pins_table, PinView};
use crate::cli::{PinsListArgs, PinsShowArgs};
use crate::store::Board;

/// Handle `vigil pins list` command
pub fn handle_pins_list(
    args: &PinsListArgs,
    board: &dyn Board,
) -> Result<String, Box<dyn std::error::Error>> {
    let metas = board.list()?;
    let pins: Vec<PinView> = metas.iter().map(PinView::from).collect();

    if args.json {
        Ok(format_pins_json(&pins))
    } else {
        Ok(format_pins_table(&pins))
    }
}

/// Handle `vigil pins show` command
pub fn handle_pins_show(
    args: &PinsShowArgs,
    board: &dyn Board,
) -> Result<String, Box<dyn std::error::Error>> {
    let pin = board.resolve(&args.name, args.version.as_deref())?;

    if args.json {
        Ok(serde_json::to_string_pretty(&pin.meta)?)
    } else {
        Ok(format_pins_table(&[PinView::from(&pin.meta)]))
    }
}
