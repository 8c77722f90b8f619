//! 교정 제안 판정 (순수 함수)

/// 교정 제안: 입력된 토큰과 반대 자판 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub original: String,
    pub converted: String,
}

/// 토큰 하나에 대한 판정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// 언어를 판별할 수 없어 검사하지 않음
    UnknownLanguage,
    /// 변환해도 달라지지 않음
    NotConverted,
    /// 원본이 유효한 단어이므로 의도된 입력으로 간주
    OriginalValid,
    /// 원본도 변환 결과도 사전에 없음
    Unrecognized,
    /// 변환 결과를 제안
    Propose(Proposal),
}

impl Decision {
    pub fn proposal(self) -> Option<Proposal> {
        match self {
            Decision::Propose(proposal) => Some(proposal),
            _ => None,
        }
    }
}

/// 세 가지 불리언과 두 문자열로 제안 여부 결정
///
/// 변환 결과만 유효할 때만 제안합니다.
pub fn decide(
    original: &str,
    converted: &str,
    original_is_valid: bool,
    converted_is_valid: bool,
) -> Decision {
    if converted == original {
        return Decision::NotConverted;
    }

    if converted_is_valid && !original_is_valid {
        Decision::Propose(Proposal {
            original: original.to_string(),
            converted: converted.to_string(),
        })
    } else if original_is_valid {
        Decision::OriginalValid
    } else {
        Decision::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        for original_is_valid in [false, true] {
            for converted_is_valid in [false, true] {
                for did_convert in [false, true] {
                    let converted = if did_convert { "שלום" } else { "akuo" };
                    let decision =
                        decide("akuo", converted, original_is_valid, converted_is_valid);

                    let expect_proposal = did_convert && converted_is_valid && !original_is_valid;
                    assert_eq!(
                        decision.clone().proposal().is_some(),
                        expect_proposal,
                        "valid=({}, {}), converted={} -> {:?}",
                        original_is_valid,
                        converted_is_valid,
                        did_convert,
                        decision
                    );
                }
            }
        }
    }

    #[test]
    fn test_proposal_contents() {
        let decision = decide("akuo", "שלום", false, true);
        assert_eq!(
            decision,
            Decision::Propose(Proposal {
                original: "akuo".to_string(),
                converted: "שלום".to_string(),
            })
        );
    }

    #[test]
    fn test_non_proposal_reasons() {
        assert_eq!(decide("akuo", "akuo", false, true), Decision::NotConverted);
        assert_eq!(decide("hello", "יקךךם", true, true), Decision::OriginalValid);
        assert_eq!(decide("hello", "יקךךם", true, false), Decision::OriginalValid);
        assert_eq!(decide("zzz", "זזז", false, false), Decision::Unrecognized);
    }
}
