//! End-to-end scenarios over the public API and the embedded word list

use hongdle::constraints::ConstraintSet;
use hongdle::core::{Jamo, Pattern, Syllable, Turn, decompose};
use hongdle::corpus::{Corpus, loader::load_corpus};
use hongdle::error::{ConstraintError, SessionError};
use hongdle::session::{GameSession, SessionState};

fn seed() -> Corpus {
    load_corpus(None, 5..=7).unwrap().0
}

#[test]
fn every_syllable_block_decomposes() {
    for code in 0xAC00..=0xD7A3_u32 {
        let ch = char::from_u32(code).unwrap();
        let jamo = decompose(&ch.to_string()).unwrap();
        assert!((2..=7).contains(&jamo.len()), "{ch} gave {} jamo", jamo.len());

        let syllable = Syllable::split(ch).unwrap();
        assert_eq!(jamo, syllable.atoms().collect::<Vec<_>>());
        if syllable.expanded_slots().next().is_none() {
            let slots = if syllable.last.is_empty() { 2 } else { 3 };
            assert_eq!(jamo.len(), slots);
        }
    }
}

#[test]
fn base_atoms_decompose_unchanged() {
    use Jamo::*;
    assert_eq!(decompose("사람").unwrap(), [S, A, R, A, M]);
    assert_eq!(decompose("한글").unwrap(), [H, A, N, G, Eu, R]);
}

#[test]
fn doubled_and_cluster_atoms_expand() {
    use Jamo::*;
    assert_eq!(decompose("깎는").unwrap(), [G, G, A, G, G, N, Eu, N]);
    assert_eq!(decompose("앉다").unwrap(), [Ng, A, N, J, D, A]);
}

#[test]
fn adding_turns_never_grows_candidates() {
    let corpus = seed();
    let guesses = ["문제", "인간", "결과", "공항", "소나기"];

    for secret in corpus.words_of_length(6) {
        let mut session = GameSession::new(&corpus);
        let mut previous = corpus.words_of_length(6).len();

        for guess in guesses {
            if session.state().is_over() {
                break;
            }
            let pattern = Pattern::score(&decompose(guess).unwrap(), secret.jamo());
            let candidates = session.add_turn(guess, pattern).unwrap();

            assert!(candidates.len() <= previous, "{secret} grew after {guess}");
            assert!(candidates.iter().any(|word| word == secret));
            previous = candidates.len();
        }
    }
}

#[test]
fn yellow_plus_black_is_an_exact_count_not_absence() {
    use Jamo::*;
    let turn = Turn::new(1, "국군", "YBBBBB".parse().unwrap()).unwrap();
    let set = ConstraintSet::new().merge(&turn).unwrap();

    assert_eq!(set.exact_count().get(&G), Some(&1));
    assert!(!set.pure_black().contains(&G));
    assert!(set.pure_black().contains(&U));
    assert!(set.pure_black().contains(&N));

    assert!(set.matches(&[M, G, A, B, A, M]));
    assert!(!set.matches(&[M, G, A, B, A, G]));
    // Yellow-excluded position
    assert!(!set.matches(&[G, M, A, B, A, M]));
}

#[test]
fn matches_has_no_side_effects() {
    let corpus = seed();
    let turn = Turn::new(1, "국군", "YBBBBB".parse().unwrap()).unwrap();
    let set = ConstraintSet::from_turns([&turn]).unwrap();
    let before = set.clone();

    for word in corpus.words_of_length(6) {
        assert_eq!(set.matches(word.jamo()), set.matches(word.jamo()));
    }
    assert_eq!(set, before);
}

#[test]
fn undo_restores_the_earlier_session() {
    let corpus = seed();

    let mut fresh = GameSession::new(&corpus);
    let expected = fresh.add_turn_str("문제", "BBBBBB").unwrap();
    assert_eq!(expected.texts(), ["결과", "영화", "방학", "공항"]);

    let mut session = GameSession::new(&corpus);
    session.add_turn_str("문제", "BBBBBB").unwrap();
    let solved = session.add_turn_str("결과", "GBBBYY").unwrap();
    assert_eq!(solved.texts(), ["공항"]);
    assert_eq!(session.state(), SessionState::Solved);

    let restored = session.undo().unwrap();
    assert_eq!(restored, expected);
    assert_eq!(session.constraints(), fresh.constraints());
    assert_eq!(session.state(), SessionState::Active);
}

#[test]
fn guessing_the_secret_word_pattern() {
    use Jamo::*;
    let corpus = seed();
    let mut session = GameSession::new(&corpus);
    let candidates = session.add_turn_str("국군", "YBBBBY").unwrap();

    let constraints = session.constraints();
    assert_eq!(constraints.exact_count().get(&G), Some(&1));
    assert!(constraints.yellow_required().contains(&N));

    assert_eq!(candidates.texts(), ["소나기"]);
    for word in candidates.iter() {
        let jamo = word.jamo();
        assert_eq!(jamo.iter().filter(|&&j| j == G).count(), 1);
        assert_ne!(jamo[0], G);
        assert!(!jamo.contains(&U));
    }
}

#[test]
fn state_machine_transitions() {
    let corpus = seed();
    let mut session = GameSession::new(&corpus);
    assert_eq!(session.state(), SessionState::Empty);

    session.add_turn_str("사람", "GBBGB").unwrap();
    assert_eq!(session.state(), SessionState::Active);

    session.reset();
    session.add_turn_str("국군", "YBBBBY").unwrap();
    assert_eq!(session.state(), SessionState::Solved);
    assert!(matches!(
        session.add_turn_str("소나기", "GGGGGG"),
        Err(SessionError::GameOver { .. })
    ));

    session.reset();
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.turns().is_empty());
    assert!(session.candidates().is_empty());

    let candidates = session.add_turn_str("국군", "GGGGGB").unwrap();
    assert!(candidates.is_empty());
    assert_eq!(session.state(), SessionState::Exhausted);

    session.reset();
    assert_eq!(session.state(), SessionState::Empty);
}

#[test]
fn contradictory_turn_leaves_session_unchanged() {
    let corpus = seed();
    let mut session = GameSession::new(&corpus);
    session.add_turn_str("국군", "YBBBBB").unwrap();
    let before = session.constraints().clone();

    // Second turn claims two ㄱ where the first proved exactly one
    let result = session.add_turn_str("국군", "YBYBBB");
    assert!(matches!(
        result,
        Err(SessionError::Constraint(ConstraintError::ExactCountConflict { .. }))
    ));
    assert_eq!(session.constraints(), &before);
    assert_eq!(session.turns().len(), 1);
}
