// ============================================================================
// Price/Time Priority Crossing (FIFO)
// ============================================================================

use crate::domain::{BookSide, Order, SidePriority, Trade};
use crate::engine::errors::{OrderBookError, OrderBookResult};
use smallvec::SmallVec;

/// Trades executed by a single submission. Most submissions clear in a
/// handful of legs, so the buffer lives on the stack.
pub(crate) type Legs = SmallVec<[Trade; 4]>;

/// Match an incoming order against the opposite side of the book, then rest
/// any remainder on its own side.
///
/// This is the one crossing routine for both directions: a buy submission
/// instantiates it as `cross::<BidPriority, AskPriority>`, a sell as
/// `cross::<AskPriority, BidPriority>`.
///
/// Walks the opposite queue best-first while a crossing condition holds.
/// Every leg executes at the resting order's price, so the incoming order
/// receives price improvement to the best resting level. Resting orders are
/// removed the instant their quantity reaches zero.
///
/// A crossing candidate owned by the submitter fails the call with
/// `SelfTrade`: legs already executed in this call stand as committed
/// trades, and the incoming remainder is dropped, not rested.
///
/// # Example
/// ```text
/// Book:  10.0 x 1 (Order A, t=100)
///        10.0 x 2 (Order B, t=101)
///
/// Incoming: Buy 2 @ 10.0
/// Result: Match 1 with A, then 1 with B (FIFO at the level)
/// ```
pub(crate) fn cross<Own, Opp>(
    mut incoming: Order,
    own: &mut BookSide<Own>,
    opposite: &mut BookSide<Opp>,
) -> OrderBookResult<Legs>
where
    Own: SidePriority,
    Opp: SidePriority,
{
    debug_assert_eq!(incoming.side, Own::SIDE);

    let mut legs = Legs::new();

    while incoming.quantity() > 0 {
        let resting = match opposite.best_mut() {
            Some(resting) if Opp::crosses(incoming.price, resting.price) => resting,
            _ => break,
        };

        if resting.owner == incoming.owner {
            // Earlier legs of this call stay committed; only the remainder
            // is aborted, and it is not rested.
            return Err(OrderBookError::SelfTrade);
        }

        let matched = incoming.quantity().min(resting.quantity());
        // Incoming orders settle at the resting level, never their own limit
        let price = resting.price;

        resting.fill(matched);
        incoming.fill(matched);

        resting
            .client()
            .order_matched(&incoming.instrument, matched, price);
        incoming
            .client()
            .order_matched(&incoming.instrument, matched, price);

        tracing::debug!(
            "matched {} x {} @ {} ({} / {})",
            incoming.instrument,
            matched,
            price,
            resting.owner,
            incoming.owner,
        );

        legs.push(Trade::new(
            (*incoming.instrument).clone(),
            resting.id,
            incoming.id,
            price,
            matched,
        ));

        if resting.is_filled() {
            opposite.remove_best();
        }
    }

    if !incoming.is_filled() {
        tracing::debug!(
            "resting {} x {} @ {} for {}",
            incoming.instrument,
            incoming.quantity(),
            incoming.price,
            incoming.owner,
        );
        own.insert(incoming);
    }

    Ok(legs)
}
