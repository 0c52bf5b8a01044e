//! Performance benchmarks for the quiz hot paths

use rand::rngs::StdRng;
use rand::SeedableRng;
use server::questions::{Question, QuestionPool};
use server::session::Session;
use shared::{parse_feedback, Feedback, Verdict};
use std::time::Instant;

/// Benchmarks drawing per-session question samples
#[test]
fn benchmark_question_sampling() {
    let pool = QuestionPool::reference();
    let mut rng = StdRng::seed_from_u64(11);

    let iterations = 100_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let sample = pool.sample(5, &mut rng).unwrap();
        assert_eq!(sample.len(), 5);
    }

    let duration = start.elapsed();
    println!(
        "Question sampling: {} iterations in {:?} ({:.2} μs/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    // Should complete in under 5 seconds even in debug builds
    assert!(duration.as_millis() < 5000);
}

/// Benchmarks case-insensitive answer grading
#[test]
fn benchmark_answer_grading() {
    let question = Question::new("Who painted the Mona Lisa?", "da Vinci");
    let answers = ["da vinci", "DA VINCI", "Da Vinci", "Michelangelo", "da Vinc"];

    let iterations = 200_000;
    let start = Instant::now();
    let mut correct = 0;

    for i in 0..iterations {
        if question.is_correct(answers[i % answers.len()]) {
            correct += 1;
        }
    }

    let duration = start.elapsed();
    println!(
        "Answer grading: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    assert_eq!(correct, iterations / answers.len() * 3);
    assert!(duration.as_millis() < 5000);
}

/// Benchmarks complete in-memory sessions
#[test]
fn benchmark_session_state_machine() {
    let pool = QuestionPool::reference();
    let mut rng = StdRng::seed_from_u64(5);

    let iterations = 20_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let questions = pool.sample(5, &mut rng).unwrap();
        let answers: Vec<String> = questions.iter().map(|q| q.answer.clone()).collect();
        let mut session = Session::new(questions);

        for answer in &answers {
            session.grade(answer);
        }

        assert_eq!(session.score(), 50);
    }

    let duration = start.elapsed();
    println!(
        "Session state machine: {} sessions in {:?} ({:.2} μs/session)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert!(duration.as_millis() < 5000);
}

/// Benchmarks feedback line formatting and client-side parsing
#[test]
fn benchmark_feedback_round_trip() {
    let iterations = 100_000;
    let start = Instant::now();

    for i in 0..iterations {
        let verdict = Verdict::from_correct(i % 2 == 0);
        let line = Feedback::new(verdict, (i as u32 % 50) * 10).to_string();
        let parsed = parse_feedback(&line).unwrap();
        assert!(parsed.score.is_some());
    }

    let duration = start.elapsed();
    println!(
        "Feedback format+parse: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    assert!(duration.as_millis() < 5000);
}
