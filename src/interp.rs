/// 기준표 보간에 쓰는 기본 ε. 개방 경계를 유효 수치로 바꿀 때 표의
/// 고유 간격만큼 안쪽/바깥쪽으로 이동시킨다.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// 기준표의 기준점. 유한 값 외에 "미만"(<x), "초과"(>x) 개방 경계를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Breakpoint {
    /// 일반 수치 기준점
    Finite(f64),
    /// 하한 개방 경계 (예: "<300"). 표의 첫 행에만 올 수 있다.
    OpenBelow(f64),
    /// 상한 개방 경계 (예: ">30.5"). 표의 마지막 행에만 올 수 있다.
    OpenAbove(f64),
}

impl Breakpoint {
    /// 표기된 원래 수치를 반환한다.
    pub fn given(&self) -> f64 {
        match self {
            Breakpoint::Finite(x) | Breakpoint::OpenBelow(x) | Breakpoint::OpenAbove(x) => *x,
        }
    }

    /// 보간 축에서 쓰는 유효 수치. 개방 경계는 ε만큼 이동한 값을 쓴다.
    pub fn effective(&self, epsilon: f64) -> f64 {
        match self {
            Breakpoint::Finite(x) => *x,
            Breakpoint::OpenBelow(x) => x - epsilon,
            Breakpoint::OpenAbove(x) => x + epsilon,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Breakpoint::Finite(x) => write!(f, "{x}"),
            Breakpoint::OpenBelow(x) => write!(f, "<{x}"),
            Breakpoint::OpenAbove(x) => write!(f, ">{x}"),
        }
    }
}

/// 기준표 한 행. 기준점과 대응 값을 담는다.
#[derive(Debug, Clone, Copy)]
pub struct TableRow {
    pub breakpoint: Breakpoint,
    pub value: f64,
}

impl TableRow {
    pub const fn new(breakpoint: Breakpoint, value: f64) -> Self {
        Self { breakpoint, value }
    }
}

/// 기준표 구성 시 발생 가능한 오류. 조회 단계에서는 오류가 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// 행이 2개 미만
    TooFewRows { found: usize },
    /// 유효 기준점이 앞 행보다 작아지는 행 위치
    UnorderedBreakpoints { index: usize },
    /// 개방 경계가 허용되지 않는 위치에 있는 행 위치
    MisplacedOpenBound { index: usize },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::TooFewRows { found } => {
                write!(f, "기준표에는 행이 2개 이상 필요합니다 (현재 {found}개)")
            }
            TableError::UnorderedBreakpoints { index } => {
                write!(f, "{index}번째 행의 기준점이 앞 행보다 작습니다")
            }
            TableError::MisplacedOpenBound { index } => {
                write!(
                    f,
                    "{index}번째 행의 개방 경계 위치가 잘못되었습니다 (<는 첫 행, >는 마지막 행만 허용)"
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

/// 구성 시 검증을 마친 조회 전용 기준표.
///
/// 기준점은 유효 수치 기준으로 비감소 순서를 유지하고, 개방 경계는
/// 첫 행(OpenBelow)과 마지막 행(OpenAbove)에 하나씩만 허용된다.
/// 유효 수치는 구성 시 한 번만 계산해 보관한다.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    name: &'static str,
    rows: Vec<TableRow>,
    resolved: Vec<f64>,
    epsilon: f64,
}

impl ReferenceTable {
    /// 기본 ε(0.1)으로 기준표를 구성한다.
    pub fn new(name: &'static str, rows: Vec<TableRow>) -> Result<Self, TableError> {
        Self::with_epsilon(name, rows, DEFAULT_EPSILON)
    }

    /// 표 고유 간격 ε을 지정해 기준표를 구성한다.
    pub fn with_epsilon(
        name: &'static str,
        rows: Vec<TableRow>,
        epsilon: f64,
    ) -> Result<Self, TableError> {
        if rows.len() < 2 {
            return Err(TableError::TooFewRows { found: rows.len() });
        }
        let last = rows.len() - 1;
        for (index, row) in rows.iter().enumerate() {
            match row.breakpoint {
                Breakpoint::OpenBelow(_) if index != 0 => {
                    return Err(TableError::MisplacedOpenBound { index });
                }
                Breakpoint::OpenAbove(_) if index != last => {
                    return Err(TableError::MisplacedOpenBound { index });
                }
                _ => {}
            }
        }
        let resolved: Vec<f64> = rows
            .iter()
            .map(|row| row.breakpoint.effective(epsilon))
            .collect();
        for (index, pair) in resolved.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(TableError::UnorderedBreakpoints { index: index + 1 });
            }
        }
        Ok(Self {
            name,
            rows,
            resolved,
            epsilon,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// 질의 값에 대응하는 표 값을 반환한다. 실패 경로가 없는 전역 함수다.
    ///
    /// 범위 밖 질의는 가장자리 값으로 고정하고, 유효 기준점과 정확히
    /// 일치하면 해당 행 값을 산술 없이 그대로 반환한다. 그 외에는 인접한
    /// 두 행 사이 선형 보간을 쓴다:
    ///
    /// v = v₀ + (v₁ - v₀) · (q - x₀) / (x₁ - x₀)
    pub fn lookup(&self, query: f64) -> f64 {
        if query <= self.resolved[0] {
            return self.rows[0].value;
        }
        let last = self.rows.len() - 1;
        if query >= self.resolved[last] {
            return self.rows[last].value;
        }
        for i in 1..self.rows.len() {
            let x1 = self.resolved[i];
            if x1 < query {
                continue;
            }
            // 일치 행은 보간 없이 반환한다. 기준점이 겹치는 표에서도
            // 아래 분모는 항상 0보다 크다.
            if query == x1 {
                return self.rows[i].value;
            }
            let x0 = self.resolved[i - 1];
            let v0 = self.rows[i - 1].value;
            let v1 = self.rows[i].value;
            return v0 + (v1 - v0) * (query - x0) / (x1 - x0);
        }
        self.rows[last].value
    }
}
