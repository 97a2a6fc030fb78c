//! Staggered entrance animation for page cards.

use std::time::Duration;

/// A card element the animator can annotate.
pub trait CardTarget {
    /// Add a class to the element.
    fn add_class(&self, class: &str);
    /// Set the CSS `animation-delay` of the element.
    fn set_animation_delay(&self, value: &str);
}

/// Delay applied to the card at `index`.
#[must_use]
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    step.saturating_mul(index)
}

/// CSS value for a delay, in whole milliseconds.
#[must_use]
pub fn css_delay(delay: Duration) -> String {
    format!("{}ms", delay.as_millis())
}

/// Mark every card as loading with a delay proportional to its document position.
///
/// Returns the number of cards annotated.
pub fn annotate_cards<T, I>(cards: I, class: &str, step: Duration) -> usize
where
    T: CardTarget,
    I: IntoIterator<Item = T>,
{
    let mut count = 0;
    for (index, card) in cards.into_iter().enumerate() {
        card.add_class(class);
        card.set_animation_delay(&css_delay(stagger_delay(index, step)));
        count += 1;
    }
    count
}
