use super::*;

#[test]
fn billing_defaults_to_annual() {
    assert_eq!(BillingCycle::default(), BillingCycle::Annual);
}

#[test]
fn annual_prices_are_discounted() {
    for plan in PLANS {
        assert!(plan.price(BillingCycle::Annual) < plan.price(BillingCycle::Monthly), "{}", plan.name);
    }
    assert_eq!(PLANS[0].price(BillingCycle::Monthly), 49);
    assert_eq!(PLANS[0].price(BillingCycle::Annual), 39);
    assert_eq!(PLANS[2].price(BillingCycle::Annual), 199);
}

#[test]
fn exactly_one_plan_is_marked_popular() {
    let popular: Vec<&str> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
    assert_eq!(popular, vec!["Professional"]);
}

#[test]
fn only_product_links_scroll_within_the_page() {
    assert_eq!(footer_anchor("Features"), Some("features"));
    assert_eq!(footer_anchor("Pricing"), Some("pricing"));
    assert_eq!(footer_anchor("Careers"), None);
}

#[test]
fn steps_are_numbered_in_order() {
    let numbers: Vec<&str> = STEPS.iter().map(|(n, _, _)| *n).collect();
    assert_eq!(numbers, vec!["01", "02", "03", "04"]);
}
