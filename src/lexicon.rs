use serde::{Deserialize, Serialize};

/// A named knowledge domain and its representative keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Domain {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: to_strings(keywords),
        }
    }
}

/// Word lists driving the sentiment scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Marker lists driving the formality classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalityMarkers {
    pub formal: Vec<String>,
    pub informal: Vec<String>,
}

/// All swappable data tables used by the analyzers.
///
/// Domain order is significant: it breaks ties between equally scored
/// domains and fixes the insertion order of extracted interests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicons {
    #[serde(default = "default_taxonomy")]
    pub taxonomy: Vec<Domain>,

    #[serde(default = "default_sentiment")]
    pub sentiment: SentimentLexicon,

    #[serde(default = "default_formality")]
    pub formality: FormalityMarkers,

    #[serde(default = "default_value_indicators")]
    pub value_indicators: Vec<String>,

    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            taxonomy: default_taxonomy(),
            sentiment: default_sentiment(),
            formality: default_formality(),
            value_indicators: default_value_indicators(),
            stop_words: default_stop_words(),
        }
    }
}

impl Lexicons {
    /// Replace the taxonomy, keeping every other table
    pub fn with_taxonomy(mut self, taxonomy: Vec<Domain>) -> Self {
        self.taxonomy = taxonomy;
        self
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_taxonomy() -> Vec<Domain> {
    vec![
        Domain::new(
            "Artificial Intelligence",
            &[
                "ai",
                "artificial intelligence",
                "machine learning",
                "ml",
                "deep learning",
                "neural networks",
                "nlp",
                "natural language processing",
                "computer vision",
                "ai ethics",
                "reinforcement learning",
                "supervised learning",
                "unsupervised learning",
                "research",
                "algorithm",
                "model",
            ],
        ),
        Domain::new(
            "Technology",
            &[
                "technology",
                "tech",
                "digital",
                "innovation",
                "software",
                "hardware",
                "programming",
                "coding",
                "development",
                "engineering",
                "product",
                "startup",
                "emerging tech",
                "future tech",
                "digital transformation",
            ],
        ),
        Domain::new(
            "Business",
            &[
                "business",
                "entrepreneurship",
                "startup",
                "management",
                "leadership",
                "strategy",
                "marketing",
                "sales",
                "finance",
                "investment",
                "venture capital",
                "economics",
                "market",
                "industry",
                "growth",
                "scaling",
            ],
        ),
        Domain::new(
            "Science",
            &[
                "science",
                "research",
                "scientific",
                "physics",
                "chemistry",
                "biology",
                "astronomy",
                "medicine",
                "healthcare",
                "climate",
                "environment",
                "sustainability",
                "experiment",
                "discovery",
                "innovation",
                "breakthrough",
            ],
        ),
        Domain::new(
            "Arts",
            &[
                "art",
                "design",
                "creative",
                "music",
                "film",
                "photography",
                "literature",
                "writing",
                "poetry",
                "painting",
                "sculpture",
                "performance",
                "theater",
                "culture",
                "aesthetic",
                "artistic",
            ],
        ),
        Domain::new(
            "Health",
            &[
                "health",
                "wellness",
                "fitness",
                "nutrition",
                "diet",
                "exercise",
                "mental health",
                "meditation",
                "mindfulness",
                "healthcare",
                "medical",
                "wellbeing",
                "lifestyle",
                "healthy living",
                "self-care",
            ],
        ),
        Domain::new(
            "Education",
            &[
                "education",
                "learning",
                "teaching",
                "school",
                "university",
                "college",
                "academic",
                "student",
                "teacher",
                "professor",
                "course",
                "curriculum",
                "knowledge",
                "skill",
                "training",
                "development",
            ],
        ),
        Domain::new(
            "Digital Marketing",
            &[
                "marketing",
                "digital marketing",
                "social media",
                "content marketing",
                "seo",
                "sem",
                "email marketing",
                "analytics",
                "audience",
                "engagement",
                "conversion",
                "brand",
                "advertising",
                "growth hacking",
                "influencer",
            ],
        ),
    ]
}

fn default_sentiment() -> SentimentLexicon {
    SentimentLexicon {
        positive: to_strings(&[
            "great",
            "excellent",
            "amazing",
            "wonderful",
            "fantastic",
            "awesome",
            "good",
            "best",
            "love",
            "happy",
            "excited",
            "opportunity",
            "success",
        ]),
        negative: to_strings(&[
            "bad",
            "terrible",
            "awful",
            "horrible",
            "worst",
            "hate",
            "sad",
            "disappointed",
            "failure",
            "problem",
            "issue",
            "difficult",
            "challenging",
        ]),
    }
}

fn default_formality() -> FormalityMarkers {
    FormalityMarkers {
        formal: to_strings(&[
            "therefore",
            "thus",
            "consequently",
            "furthermore",
            "moreover",
            "in addition",
            "in conclusion",
            "subsequently",
            "nevertheless",
            "however",
            "regarding",
            "concerning",
            "with respect to",
        ]),
        informal: to_strings(&[
            "yeah", "cool", "awesome", "btw", "lol", "haha", "gonna", "wanna", "gotta", "kinda",
            "sorta", "y'all", "folks", "stuff", "things",
        ]),
    }
}

fn default_value_indicators() -> Vec<String> {
    to_strings(&[
        "important",
        "value",
        "believe",
        "principle",
        "ethics",
        "moral",
        "right",
        "wrong",
        "good",
        "bad",
        "should",
        "must",
        "need to",
        "essential",
        "critical",
        "crucial",
        "significant",
        "meaningful",
    ])
}

// English stop words, matching the common NLTK list
fn default_stop_words() -> Vec<String> {
    to_strings(&[
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
        "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
        "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
        "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
        "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
        "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
        "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
        "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
        "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
        "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
        "wouldn't",
    ])
}
