//! Default documents used when no snapshot has ever been saved.

use chrono::{DateTime, Duration, Utc};

use crate::types::Document;

pub fn seed_documents(now: DateTime<Utc>) -> Vec<Document> {
    vec![
        Document::new(
            "1",
            "Introduction to Machine Learning",
            "Machine learning is a branch of artificial intelligence (AI) and computer science which focuses on the use of data and algorithms to imitate the way that humans learn, gradually improving its accuracy.",
            tags(&["AI", "ML", "Data Science"]),
            now - Duration::days(2),
        ),
        Document::new(
            "2",
            "Neural Networks Explained",
            "Neural networks are a series of algorithms that mimic the operations of a human brain to recognize relationships between vast amounts of data.",
            tags(&["AI", "Neural Networks", "Deep Learning"]),
            now - Duration::days(5),
        ),
        Document::new(
            "3",
            "Natural Language Processing Techniques",
            "Natural language processing (NLP) is a subfield of linguistics, computer science, and artificial intelligence concerned with the interactions between computers and human language.",
            tags(&["NLP", "AI", "Linguistics"]),
            now - Duration::days(7),
        ),
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}
