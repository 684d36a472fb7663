use crate::cli::commands::loader_for;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Calendar;
use crate::utils::table::{Column, Table};

/// Handle the `cities` subcommand
pub fn handle(cfg: &Config) -> AppResult<()> {
    let loader = loader_for(cfg, Calendar::english());

    let mut table = Table::new(vec![
        Column::left("City"),
        Column::left("File"),
        Column::left("Status"),
    ]);

    for city in loader.catalog().iter() {
        let path = loader.path_for(city);
        let status = if path.is_file() { "found" } else { "missing" };
        table.add_row(vec![
            city.key.to_string(),
            path.display().to_string(),
            status.to_string(),
        ]);
    }

    println!("📂 Data directory: {}\n", loader.data_dir().display());
    print!("{}", table.render());
    Ok(())
}
