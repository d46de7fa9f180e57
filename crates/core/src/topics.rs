//! Per-attempt topic classification and stored topic-map merging.
//!
//! Each quiz attempt tags every question with a topic; topics can repeat
//! within one batch. Accuracy is computed per topic from the current
//! attempt only, thresholded into strong (>= 75%) and weak (< 75%) sets.
//! On persistence each topic carries a level label rather than a raw
//! accuracy: historical per-topic accuracy is deliberately discarded in
//! favor of "this is roughly where you stand now".

use std::collections::BTreeMap;

use crate::proficiency::ProficiencyLevel;
use crate::quiz::{AnswerChoice, Question};

/// Accuracy at or above this fraction marks a topic as strong.
pub const STRONG_TOPIC_THRESHOLD: f64 = 0.75;

/// A stored topic map: topic name -> level label.
pub type TopicMap = BTreeMap<String, String>;

/// Disjoint strong/weak topic sets for one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicClassification {
    pub strong: Vec<String>,
    pub weak: Vec<String>,
}

/// Classify the topics of one attempt from its questions and answer map.
///
/// Accuracy per topic = correct answers for that topic / questions tagged
/// with it in this attempt. Topics not appearing in the attempt are not
/// mentioned in the output. The returned sets are disjoint and sorted.
pub fn classify_topics(
    questions: &[Question],
    answers: &BTreeMap<usize, AnswerChoice>,
) -> TopicClassification {
    let mut tallies: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for (index, q) in questions.iter().enumerate() {
        let (correct, total) = tallies.entry(q.topic.as_str()).or_default();
        *total += 1;
        if answers.get(&index) == Some(&q.correct_answer) {
            *correct += 1;
        }
    }

    let mut classification = TopicClassification::default();
    for (topic, (correct, total)) in tallies {
        let accuracy = correct as f64 / total as f64;
        if accuracy >= STRONG_TOPIC_THRESHOLD {
            classification.strong.push(topic.to_string());
        } else {
            classification.weak.push(topic.to_string());
        }
    }
    classification
}

/// Label a set of topic names with the level for the updated proficiency.
pub fn label_topics(topics: &[String], level: ProficiencyLevel) -> TopicMap {
    topics
        .iter()
        .map(|t| (t.clone(), level.label().to_string()))
        .collect()
}

/// Merge this attempt's labeled topic deltas into the stored maps.
///
/// Last-write-wins per topic name, and the two stored maps stay disjoint:
/// a topic classified strong this attempt is dropped from the stored weak
/// map, and vice versa. Stored topics untouched by this attempt survive.
pub fn merge_topic_maps(
    stored_strong: &TopicMap,
    stored_weak: &TopicMap,
    strong_delta: &TopicMap,
    weak_delta: &TopicMap,
) -> (TopicMap, TopicMap) {
    let mut strong = stored_strong.clone();
    let mut weak = stored_weak.clone();

    for (topic, label) in strong_delta {
        weak.remove(topic);
        strong.insert(topic.clone(), label.clone());
    }
    for (topic, label) in weak_delta {
        strong.remove(topic);
        weak.insert(topic.clone(), label.clone());
    }

    (strong, weak)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
