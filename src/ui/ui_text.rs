//! All user-facing copy in one place.

pub struct UiText {
    pub title: &'static str,
    pub intro: &'static str,

    pub returns_heading: &'static str,
    pub returns_submit: &'static str,
    pub returns_hint: &'static str,

    pub individual_heading: &'static str,

    pub correlation_heading: &'static str,
    pub frontier_heading: &'static str,
    pub frontier_caption: &'static str,
    pub diversification_heading: &'static str,
    pub diversification_caption: &'static str,

    pub ls_title: &'static str,
    pub ls_subtitle: &'static str,
    pub label_warning: &'static str,
    pub label_failures: &'static str,

    pub status_fetching: &'static str,
    pub no_data: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    title: "Pockets Portfolio Dashboard",
    intro: "A quick dashboard we put together for a friend who is using CommBank Pockets.",

    returns_heading: "Relative Returns",
    returns_submit: "Submit",
    returns_hint: "Pick tickers to compare, then submit.",

    individual_heading: "Individual Price Action",

    correlation_heading: "Holdings Correlation",
    frontier_heading: "Efficient Frontier",
    frontier_caption: "While there is not that much going on between these ETFs, the plot uses \
                       mean-variance optimisation to draw that line.",
    diversification_heading: "Diversification",
    diversification_caption: "Given the current portfolio we can move towards the frontier by \
                              increasing the allocation of ETHI.",

    ls_title: "Pockets",
    ls_subtitle: "Loading portfolio data from the bucket...",
    label_warning: "\u{26a0}",
    label_failures: "object(s) failed to load",

    status_fetching: "fetching...",
    no_data: "No data for this selection.",
};
