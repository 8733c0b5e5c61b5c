/// 회수기간 평가 등급의 표시 색.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Green,
    Amber,
    Orange,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Green => "#07ff01",
            Severity::Amber => "#ffbf00",
            Severity::Orange => "#ff6a00",
        }
    }
}

/// 회수기간에 따른 5단계 평가. 경계값은 더 좋은 등급에 포함된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// ≤ 2년
    Excellent,
    /// ≤ 4년
    VeryGood,
    /// ≤ 6년
    Good,
    /// ≤ 8년
    Acceptable,
    /// > 8년 (NaN 포함)
    Poor,
}

impl Evaluation {
    pub fn for_roi_years(roi_years: f64) -> Self {
        if roi_years <= 2.0 {
            Evaluation::Excellent
        } else if roi_years <= 4.0 {
            Evaluation::VeryGood
        } else if roi_years <= 6.0 {
            Evaluation::Good
        } else if roi_years <= 8.0 {
            Evaluation::Acceptable
        } else {
            Evaluation::Poor
        }
    }

    /// 언어팩 `charging.evaluation` 배열의 위치
    pub fn index(&self) -> usize {
        match self {
            Evaluation::Excellent => 0,
            Evaluation::VeryGood => 1,
            Evaluation::Good => 2,
            Evaluation::Acceptable => 3,
            Evaluation::Poor => 4,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Evaluation::Excellent | Evaluation::VeryGood => Severity::Green,
            Evaluation::Good | Evaluation::Acceptable => Severity::Amber,
            Evaluation::Poor => Severity::Orange,
        }
    }

    pub fn message<'a>(&self, messages: &'a [String; 5]) -> &'a str {
        &messages[self.index()]
    }
}
