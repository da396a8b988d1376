//! Integration tests for customization pricing

use std::io::Write;

use rusty_money::{Money, iso::PKR};
use testresult::TestResult;

use storefront::prelude::*;

const FABRIC: &str = "fabricUpgrade";
const ACCESSORIES: &str = "additionalAccessories";

fn catalog() -> Result<Catalog<'static>, CatalogError> {
    Catalog::with_options(
        [
            CustomizationOption::flat(
                FABRIC,
                "Fabric Upgrade",
                "Premium fabric",
                Money::from_minor(200_000, PKR),
            ),
            CustomizationOption::per_unit(
                ACCESSORIES,
                "Additional Accessories",
                "Per piece",
                Money::from_minor(50_000, PKR),
            ),
        ],
        PKR,
    )
}

fn assert_total_is_sum(breakdown: &PriceBreakdown<'_>) {
    assert_eq!(
        breakdown.total_price().to_minor_units(),
        breakdown.base_price().to_minor_units() + breakdown.additional_cost().to_minor_units(),
        "total is not base + additional: {breakdown:?}"
    );
}

#[test]
fn fabric_upgrade_and_three_accessories() -> TestResult {
    let catalog = catalog()?;
    let selection = CustomizationSelection::for_catalog(&catalog)
        .toggle(FABRIC, true)
        .toggle(ACCESSORIES, true)
        .set_quantity(ACCESSORIES, 3);

    let breakdown = compose(Money::from_minor(500_000, PKR), &catalog, &selection)?;

    assert_eq!(breakdown.additional_cost(), Money::from_minor(350_000, PKR));
    assert_eq!(breakdown.total_price(), Money::from_minor(850_000, PKR));
    assert_total_is_sum(&breakdown);

    Ok(())
}

#[test]
fn enabled_accessories_without_quantity_cost_nothing() -> TestResult {
    let catalog = catalog()?;
    let selection = CustomizationSelection::for_catalog(&catalog).toggle(ACCESSORIES, true);

    let breakdown = compose(Money::from_minor(500_000, PKR), &catalog, &selection)?;

    let line = breakdown.lines().first().ok_or("missing accessories line")?;

    assert_eq!(line.quantity, 0);
    assert_eq!(line.cost.to_minor_units(), 0);
    assert_eq!(breakdown.additional_cost().to_minor_units(), 0);

    Ok(())
}

#[test]
fn enabling_options_or_adding_units_never_lowers_total() -> TestResult {
    let catalog = catalog()?;
    let base = Money::from_minor(500_000, PKR);
    let steps: [(&str, bool, i64); 5] = [
        (ACCESSORIES, false, 2),
        (ACCESSORIES, true, 0),
        (FABRIC, true, 0),
        (ACCESSORIES, true, 1),
        (ACCESSORIES, true, 10),
    ];

    let mut selection = CustomizationSelection::for_catalog(&catalog);
    let mut previous = compose(base, &catalog, &selection)?;

    for (key, enable, units) in steps {
        if enable {
            selection = selection.toggle(key, true);
        }

        selection = selection.set_quantity(key, units);

        let next = compose(base, &catalog, &selection)?;

        assert!(
            next.total_price().to_minor_units() >= previous.total_price().to_minor_units(),
            "total decreased from {previous:?} to {next:?}"
        );
        assert_total_is_sum(&next);

        previous = next;
    }

    Ok(())
}

#[test]
fn widget_notifies_once_per_change() -> TestResult {
    #[derive(Debug, Default)]
    struct Totals(Vec<i64>);

    impl PriceObserver for Totals {
        fn on_price_change(&mut self, breakdown: &PriceBreakdown<'_>) {
            self.0.push(breakdown.total_price().to_minor_units());
        }
    }

    let mut widget =
        CustomizationWidget::new(Money::from_minor(500_000, PKR), catalog()?, Totals::default())?;

    widget.toggle(FABRIC, true)?;
    widget.toggle(ACCESSORIES, true)?;
    widget.change_quantity(ACCESSORIES, 3)?;
    widget.change_quantity(ACCESSORIES, -10)?;
    widget.change_quantity(ACCESSORIES, -1)?;
    widget.toggle("unknown", true)?;

    assert_eq!(
        widget.observer().0,
        [500_000, 700_000, 700_000, 850_000, 700_000]
    );

    Ok(())
}

#[test]
fn config_file_drives_the_widget() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;

    writeln!(
        file,
        "currency: PKR\n\
         price_ceiling: \"20000 PKR\"\n\
         customizations:\n  \
         - key: {FABRIC}\n    \
         label: Fabric Upgrade\n    \
         unit_cost: \"2000 PKR\"\n"
    )?;

    let config = StorefrontConfig::from_path(file.path())?;
    let mut widget = CustomizationWidget::new(
        Money::from_minor(500_000, PKR),
        config.catalog().clone(),
        NoopObserver,
    )?;

    let breakdown = widget.toggle(FABRIC, true)?;

    assert_eq!(format_money(&breakdown.total_price()), "PKR 7,000");
    assert_eq!(config.filter_selection().full_range(), PriceRange::new(0, 2_000_000)?);

    Ok(())
}

#[test]
fn bundled_fixture_matches_builtin_catalog() -> TestResult {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/storefront.yml");
    let config = StorefrontConfig::from_path(path)?;

    assert_eq!(config.catalog(), &Catalog::default_pkr());
    assert_eq!(config.price_ceiling(), StorefrontConfig::default().price_ceiling());

    Ok(())
}
