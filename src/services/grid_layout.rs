//! Responsive grid layout calculation
//!
//! `compute_layout` maps viewport/sidebar measurements to a column count
//! and column width; `apply_layout` writes those sizes onto an explicit
//! card container model. The split keeps the math pure and testable while
//! the host UI decides when to recompute (resize, sidebar toggle, item
//! count change).

/// Default chrome padding (scrollbar + page margins), in px.
pub const CHROME_PADDING: f64 = 60.0;
/// Card width constraints for the dynamically sized bottle cards, in px.
pub const CARD_MIN_WIDTH: f64 = 280.0;
pub const CARD_MAX_WIDTH: f64 = 400.0;
/// Gap between cards, in px.
pub const CARD_GAP: f64 = 16.0;
/// Fixed width applied to every non-bottle card kind, in px.
pub const FIXED_CARD_WIDTH: f64 = 280.0;

const MAX_COLUMNS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: u32,
    pub column_width: f64,
    pub available_width: f64,
}

/// Compute how many card columns fit and how wide each one should be.
///
/// The column count is chosen from how many min-width cards fit, capped at
/// 7, then checked for feasibility at max card width; if even max-width
/// cards cannot fill that many columns the count drops to what they can.
pub fn compute_layout(
    viewport_width: f64,
    sidebar_width: f64,
    chrome_padding: f64,
    card_min_width: f64,
    card_max_width: f64,
    card_gap: f64,
) -> GridLayout {
    let available_width = viewport_width - sidebar_width - chrome_padding;

    let columns_at_min = ((available_width + card_gap) / (card_min_width + card_gap)).floor() as i64;
    let columns_at_max = ((available_width + card_gap) / (card_max_width + card_gap)).floor() as i64;

    let mut columns = columns_at_min.clamp(1, MAX_COLUMNS);
    if columns > columns_at_max {
        columns = columns_at_max.max(1);
    }

    let column_width = if columns == 1 {
        (available_width * 0.8).clamp(card_min_width, card_max_width)
    } else {
        ((available_width - columns as f64 * card_gap) / columns as f64)
            .clamp(card_min_width, card_max_width)
    };

    GridLayout {
        columns: columns as u32,
        column_width,
        available_width,
    }
}

/// Card kinds rendered in the collection grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Bottle cards take the dynamically computed column width
    Bottle,
    Summary,
    Placeholder,
}

/// One rendered card slot with its forced size, the analog of inline
/// width/min-width/max-width styles.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSlot {
    pub kind: CardKind,
    pub width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl CardSlot {
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            width: 0.0,
            min_width: 0.0,
            max_width: 0.0,
        }
    }
}

/// Container of card slots; `wrap` and `gap` mirror the flex settings the
/// layout forces on the rendered container.
#[derive(Debug, Clone, PartialEq)]
pub struct GridContainer {
    pub wrap: bool,
    pub gap: f64,
    pub cards: Vec<CardSlot>,
}

impl GridContainer {
    pub fn new(cards: Vec<CardSlot>) -> Self {
        Self {
            wrap: false,
            gap: 0.0,
            cards,
        }
    }
}

/// Force the computed layout onto the container. Idempotent: re-applying
/// the same layout leaves every width unchanged.
pub fn apply_layout(container: &mut GridContainer, layout: &GridLayout) {
    container.wrap = true;
    container.gap = CARD_GAP;

    for card in &mut container.cards {
        let width = match card.kind {
            CardKind::Bottle => layout.column_width,
            CardKind::Summary | CardKind::Placeholder => FIXED_CARD_WIDTH,
        };
        card.width = width;
        card.min_width = width;
        card.max_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_viewport() {
        let layout = compute_layout(1600.0, 250.0, CHROME_PADDING, CARD_MIN_WIDTH, CARD_MAX_WIDTH, CARD_GAP);
        assert_eq!(layout.available_width, 1290.0);
        assert!(layout.columns >= 1 && layout.columns <= 7);
        assert!(layout.column_width >= CARD_MIN_WIDTH);
        assert!(layout.column_width <= CARD_MAX_WIDTH);
        // 4 columns fit at min width but only 3 at max width, so the
        // feasibility rule settles on 3; (1290 - 48) / 3 clamps to 400
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.column_width, CARD_MAX_WIDTH);
    }

    #[test]
    fn test_narrow_viewport_single_column() {
        let layout = compute_layout(360.0, 0.0, CHROME_PADDING, CARD_MIN_WIDTH, CARD_MAX_WIDTH, CARD_GAP);
        assert_eq!(layout.columns, 1);
        // 300 * 0.8 = 240 clamps up to the min card width
        assert_eq!(layout.column_width, CARD_MIN_WIDTH);
    }

    #[test]
    fn test_column_count_capped_at_seven() {
        let layout = compute_layout(5000.0, 0.0, CHROME_PADDING, CARD_MIN_WIDTH, CARD_MAX_WIDTH, CARD_GAP);
        assert_eq!(layout.columns, 7);
    }

    #[test]
    fn test_columns_reduced_when_infeasible_at_max_width() {
        // Feasibility at max card width can only lower the count, never
        // raise it, and never below one column.
        for viewport in [800.0, 1000.0, 1200.0, 1440.0, 1920.0, 2560.0] {
            let layout =
                compute_layout(viewport, 250.0, CHROME_PADDING, CARD_MIN_WIDTH, CARD_MAX_WIDTH, CARD_GAP);
            assert!(layout.columns >= 1);
            assert!(layout.columns <= 7);
            assert!(layout.column_width >= CARD_MIN_WIDTH);
            assert!(layout.column_width <= CARD_MAX_WIDTH);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = compute_layout(1600.0, 250.0, 60.0, 280.0, 400.0, 16.0);
        let b = compute_layout(1600.0, 250.0, 60.0, 280.0, 400.0, 16.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_layout_sets_widths_by_kind() {
        let layout = compute_layout(1600.0, 250.0, CHROME_PADDING, CARD_MIN_WIDTH, CARD_MAX_WIDTH, CARD_GAP);
        let mut container = GridContainer::new(vec![
            CardSlot::new(CardKind::Bottle),
            CardSlot::new(CardKind::Summary),
            CardSlot::new(CardKind::Placeholder),
        ]);

        apply_layout(&mut container, &layout);

        assert!(container.wrap);
        assert_eq!(container.gap, CARD_GAP);
        assert_eq!(container.cards[0].width, layout.column_width);
        assert_eq!(container.cards[1].width, FIXED_CARD_WIDTH);
        assert_eq!(container.cards[2].width, FIXED_CARD_WIDTH);
        assert_eq!(container.cards[0].min_width, container.cards[0].max_width);
    }

    #[test]
    fn test_apply_layout_is_idempotent() {
        let layout = compute_layout(1600.0, 250.0, CHROME_PADDING, CARD_MIN_WIDTH, CARD_MAX_WIDTH, CARD_GAP);
        let mut container = GridContainer::new(vec![
            CardSlot::new(CardKind::Bottle),
            CardSlot::new(CardKind::Summary),
        ]);

        apply_layout(&mut container, &layout);
        let first = container.clone();
        apply_layout(&mut container, &layout);

        assert_eq!(container, first);
    }
}
