use anyhow::Result;

use crate::catalog::Catalog;
use crate::cli::EventCommand;

pub fn run(cmd: &EventCommand) -> Result<()> {
	let catalog = Catalog::load()?;

	match cmd {
		EventCommand::List => list_events(&catalog),
		EventCommand::Show { index } => show_event(&catalog, *index),
	}
}

fn list_events(catalog: &Catalog) -> Result<()> {
	for (i, event) in catalog.events.iter().enumerate() {
		println!("#{i}  id={}  {}  ({})", event.id, event.name, event.location);
	}
	println!("\n{} event(s) in the catalog.", catalog.len());
	Ok(())
}

fn show_event(catalog: &Catalog, index: usize) -> Result<()> {
	let Some(event) = catalog.get(index) else {
		anyhow::bail!(
			"no event #{index} in the catalog ({} available)",
			catalog.len()
		);
	};

	println!("Event #{index}");
	println!("  ID:       {}", event.id);
	println!("  Name:     {}", event.name);
	println!("  Location: {}", event.location);
	println!("  Start:    {}", event.start_date);
	println!("  End:      {}", event.end_date);
	Ok(())
}
