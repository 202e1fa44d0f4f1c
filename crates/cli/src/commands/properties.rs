//! Property commands.

use std::path::Path;

use lightbnb_core::Price;
use lightbnb_store::Database;
use lightbnb_store::models::NewProperty;
use lightbnb_store::search::{PropertyFilter, SearchQuery};

use super::{CommandError, print_json};
use crate::SearchArgs;

fn filter_from(args: &SearchArgs) -> PropertyFilter {
    PropertyFilter {
        city: args.city.clone(),
        owner_id: args.owner,
        minimum_price_per_night: args.min_price.map(Price::from_cents),
        maximum_price_per_night: args.max_price.map(Price::from_cents),
        minimum_rating: args.min_rating,
    }
}

/// Print the SQL and parameters a search would run.
pub fn explain(args: &SearchArgs) {
    let filter = filter_from(args);
    if args.min_price.is_some() != args.max_price.is_some() {
        tracing::warn!("Price range needs both --min-price and --max-price; ignoring it");
    }
    if filter.is_empty() {
        tracing::info!("No filters; every reviewed property matches");
    }

    let query = SearchQuery::build(&filter, args.limit);
    #[allow(clippy::print_stdout)]
    {
        println!("{}", query.sql());
        for (i, param) in query.params().iter().enumerate() {
            println!("  ${} = {param}", i + 1);
        }
    }
}

/// Run a search and print the matching listings.
pub async fn search(db: &Database, args: &SearchArgs) -> Result<(), CommandError> {
    let filter = filter_from(args);
    let listings = db.properties().search(&filter, args.limit).await?;
    tracing::info!(count = listings.len(), "Properties found");
    print_json(&listings)
}

/// Insert the listing described in `file` and print the stored record.
pub async fn add(db: &Database, file: &Path) -> Result<(), CommandError> {
    let content = tokio::fs::read_to_string(file).await?;
    let new_property: NewProperty = serde_json::from_str(&content)?;

    let property = db.properties().create(&new_property).await?;
    print_json(&property)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::{Cli, Commands, PropertyAction};

    fn search_args(argv: &[&str]) -> SearchArgs {
        let cli = Cli::try_parse_from(
            ["lightbnb", "properties", "search"]
                .iter()
                .chain(argv)
                .copied(),
        )
        .unwrap();
        let Commands::Properties {
            action: PropertyAction::Search(args),
        } = cli.command
        else {
            panic!("expected properties search");
        };
        args
    }

    #[test]
    fn test_filter_without_flags_is_empty() {
        assert!(filter_from(&search_args(&[])).is_empty());
        assert!(filter_from(&search_args(&["--city", ""])).is_empty());
        assert!(filter_from(&search_args(&["--min-price", "5000"])).is_empty());
    }

    #[test]
    fn test_filter_from_flags() {
        let filter = filter_from(&search_args(&[
            "--owner",
            "7",
            "--min-price",
            "0",
            "--max-price",
            "20000",
        ]));
        assert!(!filter.is_empty());
        assert_eq!(filter.owner_id, Some(lightbnb_core::UserId::new(7)));
        assert_eq!(
            filter.price_range(),
            Some((Price::from_cents(0), Price::from_cents(20_000)))
        );
    }
}
