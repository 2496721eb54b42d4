//! Property tests over random seeds and guess sequences.

use hilo_engine::{
    evaluate, Card, Deck, EngineError, Guess, Number, OutcomeKind, RoundEngine, RoundStatus,
    RuleSet, Special, Verdict, STANDARD_DECK_SIZE,
};
use proptest::prelude::*;

fn guess_strategy() -> impl Strategy<Value = Guess> {
    prop_oneof![Just(Guess::Higher), Just(Guess::Lower), Just(Guess::Blank)]
}

fn rules_strategy() -> impl Strategy<Value = RuleSet> {
    any::<bool>().prop_map(|strict| RuleSet::strict().with_blank_strict(strict))
}

fn number_strategy() -> impl Strategy<Value = Number> {
    (1u8..=14).prop_map(|v| Number::new(v).unwrap())
}

proptest! {
    /// Every shuffle is a permutation of the standard multiset.
    #[test]
    fn prop_shuffled_deck_is_standard(seed in any::<u64>()) {
        let mut rng = hilo_engine::GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);
        prop_assert_eq!(deck.len(), STANDARD_DECK_SIZE);
        prop_assert!(deck.is_standard());
    }

    /// Rounds open on a number with 20 cards left, none lost to rotation.
    #[test]
    fn prop_round_opens_on_number(seed in any::<u64>(), rules in rules_strategy()) {
        let mut engine = RoundEngine::new(rules, seed);
        let snapshot = engine.start_round().unwrap();

        prop_assert_eq!(snapshot.remaining, STANDARD_DECK_SIZE - 1);
        let state = engine.state().unwrap();
        prop_assert_eq!(state.status(), RoundStatus::InProgress);

        let mut cards = state.deck().cards().to_vec();
        cards.push(Card::Number(snapshot.reference));
        prop_assert!(Deck::from_cards(cards).is_standard());
    }

    /// Direction guesses are judged purely by comparison with the reference.
    #[test]
    fn prop_direction_matching(
        drawn in number_strategy(),
        reference in number_strategy(),
        rules in rules_strategy(),
    ) {
        let higher = evaluate(Card::Number(drawn), Guess::Higher, reference, &rules);
        let lower = evaluate(Card::Number(drawn), Guess::Lower, reference, &rules);

        prop_assert_eq!(higher == Verdict::Correct, drawn > reference);
        prop_assert_eq!(lower == Verdict::Correct, drawn < reference);
        if drawn == reference {
            prop_assert_eq!(higher.kind(), OutcomeKind::Loss);
            prop_assert_eq!(lower.kind(), OutcomeKind::Loss);
        }
    }

    /// Calling Blank is correct only when the Blank is drawn.
    #[test]
    fn prop_blank_call_strictness(
        drawn in number_strategy(),
        reference in number_strategy(),
        rules in rules_strategy(),
    ) {
        let on_number = evaluate(Card::Number(drawn), Guess::Blank, reference, &rules);
        prop_assert_eq!(on_number.kind(), OutcomeKind::Loss);

        let on_blank = evaluate(Card::Special(Special::Blank), Guess::Blank, reference, &rules);
        prop_assert_eq!(on_blank.kind(), OutcomeKind::Continue);
    }

    /// Skip, Pass and Reverse never change the round.
    #[test]
    fn prop_specials_are_neutral(
        reference in number_strategy(),
        guess in guess_strategy(),
        rules in rules_strategy(),
        which in 0usize..3,
    ) {
        let special = [Special::Skip, Special::Pass, Special::Reverse][which];
        let mut engine = RoundEngine::new(rules, 0);
        engine
            .start_round_with(Deck::from_cards(vec![Card::Special(special), Card::Number(reference)]))
            .unwrap();

        let outcome = engine.reveal(guess).unwrap();

        prop_assert_eq!(outcome.kind, OutcomeKind::Continue);
        prop_assert_eq!(outcome.reference_after, reference);
        prop_assert_eq!(engine.state().unwrap().status(), RoundStatus::InProgress);
    }

    /// Each reveal removes exactly one card until the round ends, and a lost
    /// round stays frozen.
    #[test]
    fn prop_play_through(
        seed in any::<u64>(),
        rules in rules_strategy(),
        guesses in prop::collection::vec(guess_strategy(), 1..40),
    ) {
        let mut engine = RoundEngine::new(rules, seed);
        let mut remaining = engine.start_round().unwrap().remaining;

        for guess in guesses {
            let before = engine.state().cloned().unwrap();
            match engine.reveal(guess) {
                Ok(outcome) if outcome.kind == OutcomeKind::DeckExhausted => {
                    prop_assert_eq!(remaining, 0);
                    prop_assert_eq!(engine.state(), Some(&before));
                }
                Ok(outcome) => {
                    prop_assert_eq!(outcome.remaining, remaining - 1);
                    remaining = outcome.remaining;

                    let drawn = outcome.revealed.unwrap();
                    if outcome.reference_after != before.reference() {
                        prop_assert_eq!(outcome.verdict, Verdict::Correct);
                        prop_assert_eq!(Card::Number(outcome.reference_after), drawn);
                    }
                    prop_assert_eq!(
                        engine.state().unwrap().is_lost(),
                        outcome.kind == OutcomeKind::Loss
                    );
                }
                Err(e) => {
                    prop_assert_eq!(e, EngineError::RevealWhileTerminal);
                    prop_assert!(before.is_lost());
                    prop_assert_eq!(engine.state(), Some(&before));
                }
            }
        }
    }
}
