//! 本地关键词分类器
//!
//! 不依赖任何模型：按学科关键词计数，得分最高的候选标签胜出。
//! 没有任何关键词命中时返回 `None`；得分相同取候选顺序靠前的标签。

use crate::models::subject::Subject;
use crate::services::subject_classifier::SubjectClassifier;

/// 关键词 → 科目（小写单词）
static KEYWORDS: phf::Map<&'static str, Subject> = phf::phf_map! {
    // 数学
    "integral" => Subject::Mathematics,
    "integrate" => Subject::Mathematics,
    "derivative" => Subject::Mathematics,
    "differentiate" => Subject::Mathematics,
    "equation" => Subject::Mathematics,
    "equations" => Subject::Mathematics,
    "matrix" => Subject::Mathematics,
    "determinant" => Subject::Mathematics,
    "probability" => Subject::Mathematics,
    "triangle" => Subject::Mathematics,
    "polynomial" => Subject::Mathematics,
    "quadratic" => Subject::Mathematics,
    "roots" => Subject::Mathematics,
    "logarithm" => Subject::Mathematics,
    "log" => Subject::Mathematics,
    "sin" => Subject::Mathematics,
    "cos" => Subject::Mathematics,
    "tan" => Subject::Mathematics,
    "limit" => Subject::Mathematics,
    "parabola" => Subject::Mathematics,
    "ellipse" => Subject::Mathematics,
    "hyperbola" => Subject::Mathematics,
    "sequence" => Subject::Mathematics,
    "series" => Subject::Mathematics,
    "function" => Subject::Mathematics,
    "permutations" => Subject::Mathematics,
    "combinations" => Subject::Mathematics,
    "dx" => Subject::Mathematics,
    "prove" => Subject::Mathematics,
    "locus" => Subject::Mathematics,
    // 物理
    "velocity" => Subject::Physics,
    "acceleration" => Subject::Physics,
    "speed" => Subject::Physics,
    "force" => Subject::Physics,
    "friction" => Subject::Physics,
    "momentum" => Subject::Physics,
    "energy" => Subject::Physics,
    "kinetic" => Subject::Physics,
    "gravity" => Subject::Physics,
    "gravitational" => Subject::Physics,
    "current" => Subject::Physics,
    "voltage" => Subject::Physics,
    "resistance" => Subject::Physics,
    "capacitor" => Subject::Physics,
    "magnetic" => Subject::Physics,
    "charge" => Subject::Physics,
    "wave" => Subject::Physics,
    "frequency" => Subject::Physics,
    "wavelength" => Subject::Physics,
    "lens" => Subject::Physics,
    "refraction" => Subject::Physics,
    "pendulum" => Subject::Physics,
    "projectile" => Subject::Physics,
    "torque" => Subject::Physics,
    "newton" => Subject::Physics,
    "joule" => Subject::Physics,
    "g" => Subject::Physics,
    "masses" => Subject::Physics,
    "block" => Subject::Physics,
    "particle" => Subject::Physics,
    // 化学
    "mol" => Subject::Chemistry,
    "mole" => Subject::Chemistry,
    "moles" => Subject::Chemistry,
    "molar" => Subject::Chemistry,
    "molarity" => Subject::Chemistry,
    "ph" => Subject::Chemistry,
    "reaction" => Subject::Chemistry,
    "acid" => Subject::Chemistry,
    "acidic" => Subject::Chemistry,
    "base" => Subject::Chemistry,
    "oxidation" => Subject::Chemistry,
    "reduction" => Subject::Chemistry,
    "compound" => Subject::Chemistry,
    "element" => Subject::Chemistry,
    "bond" => Subject::Chemistry,
    "isomer" => Subject::Chemistry,
    "isomers" => Subject::Chemistry,
    "organic" => Subject::Chemistry,
    "catalyst" => Subject::Chemistry,
    "equilibrium" => Subject::Chemistry,
    "atomic" => Subject::Chemistry,
    "valence" => Subject::Chemistry,
    "salt" => Subject::Chemistry,
    "gas" => Subject::Chemistry,
    "hcl" => Subject::Chemistry,
    "naoh" => Subject::Chemistry,
    "enthalpy" => Subject::Chemistry,
    "hybridization" => Subject::Chemistry,
    "electrolysis" => Subject::Chemistry,
    "noble" => Subject::Chemistry,
};

/// 本地关键词分类器
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordSubjectClassifier;

impl KeywordSubjectClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 同步打分，返回得分最高的候选标签
    pub fn best_label<'a>(&self, text: &str, candidate_labels: &[&'a str]) -> Option<&'a str> {
        let lower = text.to_lowercase();
        let mut scores = [0usize; 3];

        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if let Some(subject) = KEYWORDS.get(word) {
                scores[*subject as usize] += 1;
            }
        }

        let mut best: Option<(&'a str, usize)> = None;
        for &label in candidate_labels {
            let Some(subject) = Subject::from_label(label) else {
                continue;
            };
            let score = scores[subject as usize];
            if score > 0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((label, score));
            }
        }

        best.map(|(label, _)| label)
    }
}

impl SubjectClassifier for KeywordSubjectClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> anyhow::Result<Option<String>> {
        Ok(self.best_label(text, candidate_labels).map(str::to_string))
    }
}
