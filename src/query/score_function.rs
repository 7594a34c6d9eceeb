use serde_json::{Map, Value as Json};


/// A script the retrieval engine will compile and run
///
/// Only the binding is kept here, nothing is evaluated at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptBinding {
    pub script: String,
    pub lang: Option<String>,
    pub params: Map<String, Json>,
}


impl ScriptBinding {
    pub fn new(script: &str) -> ScriptBinding {
        ScriptBinding {
            script: script.to_string(),
            lang: None,
            params: Map::new(),
        }
    }
}


/// Function that rescales the score of a query
///
/// The result is multiplied with the score of the wrapped query.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreFunction {
    BoostFactor(f32),
    Script(ScriptBinding),
}


impl ScoreFunction {
    pub fn boost_factor(&self) -> Option<f32> {
        match *self {
            ScoreFunction::BoostFactor(boost_factor) => Some(boost_factor),
            ScoreFunction::Script(_) => None,
        }
    }

    pub fn script(&self) -> Option<&ScriptBinding> {
        match *self {
            ScoreFunction::Script(ref binding) => Some(binding),
            ScoreFunction::BoostFactor(_) => None,
        }
    }
}
