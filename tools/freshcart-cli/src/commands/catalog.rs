//! Catalog browsing commands.

use anyhow::{bail, Result};
use freshcart_commerce::search::{Filter, SearchQuery, SortOption};
use freshcart_commerce::{Currency, Money};

use super::{CatalogArgs, CatalogCommand, SearchArgs};
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List => list(ctx),
        CatalogCommand::Search(search) => search_catalog(search, ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.products());
        return Ok(());
    }

    ctx.output.header("Catalog");
    ctx.output.products(catalog.products());
    ctx.output.info("");
    ctx.output.kv("Products", &catalog.len().to_string());
    ctx.output.kv("Categories", &catalog.categories().join(", "));
    if ctx.output.is_verbose() {
        ctx.output.kv("Brands", &catalog.brands().join(", "));
    }

    Ok(())
}

fn search_catalog(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let query = build_query(args, ctx.config.store.currency)?;
    ctx.output.debug(&format!(
        "{} filter(s), sorted by {}",
        query.filters.len(),
        query.sort.as_str()
    ));

    let results = catalog.search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!("Search ({})", query.sort.display_name()));
    if results.is_empty() {
        ctx.output.info("No products match");
        return Ok(());
    }
    ctx.output.products(&results.products);
    ctx.output.info("");
    ctx.output.info(&results.summary());
    for (category, count) in results.category_counts() {
        ctx.output.kv(category, &count.to_string());
    }

    Ok(())
}

/// Translate command-line options into a search query.
pub fn build_query(args: SearchArgs, currency: Currency) -> Result<SearchQuery> {
    let Some(sort) = SortOption::from_str(&args.sort) else {
        bail!("Unknown sort option: {}", args.sort);
    };

    let mut query = SearchQuery::new().with_sort(sort).with_tags(args.tags);
    if let Some(text) = args.text {
        query = query.with_query(text);
    }
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    if let Some(brand) = args.brand {
        query = query.with_filter(Filter::brand(brand));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let min = args.min_price.map(|p| Money::from_decimal(p, currency));
        let max = args.max_price.map(|p| Money::from_decimal(p, currency));
        query = query.with_filter(Filter::price_range(min, max));
    }
    if args.in_stock {
        query = query.with_filter(Filter::in_stock());
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshcart_commerce::catalog::Catalog;

    fn ids(args: SearchArgs) -> Vec<String> {
        let catalog = Catalog::fixture(Currency::USD).unwrap();
        let query = build_query(args, Currency::USD).unwrap();
        catalog
            .search(&query)
            .products
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn price_range_and_sort() {
        let args = SearchArgs {
            max_price: Some(3.0),
            sort: "price_asc".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(args), vec!["7", "4", "1"]);
    }

    #[test]
    fn in_stock_category() {
        let args = SearchArgs {
            category: Some("beverages".to_string()),
            in_stock: true,
            sort: "relevance".to_string(),
            ..Default::default()
        };
        assert!(ids(args).is_empty());
    }

    #[test]
    fn unknown_sort_is_an_error() {
        let args = SearchArgs {
            sort: "cheapest".to_string(),
            ..Default::default()
        };
        assert!(build_query(args, Currency::USD).is_err());
    }
}
