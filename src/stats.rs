/// 반복 측정값 요약 통계.
#[derive(Debug, Clone, Copy)]
pub struct ReplicationStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// 모표준편차
    pub std_dev: f64,
}

/// 산술 평균을 계산한다. 빈 입력이면 None.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// 반복 측정값의 평균/최소/최대/모표준편차를 계산한다. 빈 입력이면 None.
pub fn replication_stats(values: &[f64]) -> Option<ReplicationStats> {
    let mean = mean(values)?;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(ReplicationStats {
        mean,
        min,
        max,
        std_dev: variance.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert!(mean(&[]).is_none());
        assert!(replication_stats(&[]).is_none());
    }

    #[test]
    fn population_std_dev() {
        let s = replication_stats(&[750.0, 770.0]).unwrap();
        assert_eq!(s.mean, 760.0);
        assert_eq!(s.min, 750.0);
        assert_eq!(s.max, 770.0);
        // 모표준편차(n으로 나눔).
        assert!((s.std_dev - 10.0).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let s = replication_stats(&[42.0]).unwrap();
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.std_dev, 0.0);
    }
}
