//! Static content behind the public pages. The notice board is the only
//! dynamic part of the site; everything else is served from here.

use serde::Serialize;

pub const ACADEMY_NAME: &str = "리틀즈 학원";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub name: &'static str,
    pub title: &'static str,
    pub badge: Option<&'static str>,
    pub target: &'static str,
    pub schedule: &'static str,
    pub capacity: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

/// A featured class on the home page.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Featured {
    pub title: &'static str,
    pub age: &'static str,
    pub schedule: &'static str,
    pub group: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Debug, Clone)]
pub struct ProgramsPage {
    pub headline: &'static str,
    pub programs: &'static [Program],
    pub process: &'static [Step],
    pub call_to_action: &'static str,
}

#[derive(Serialize, Debug, Clone)]
pub struct AboutPage {
    pub academy: &'static str,
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub introduction: &'static [&'static str],
    pub philosophy: &'static [Step],
    pub strengths: &'static [Step],
    pub founded: u16,
}

pub const PROGRAMS: &[Program] = &[
    Program {
        name: "초등 종합반",
        title: "리틀즈 초등 종합반",
        badge: None,
        target: "초등학교 1-6학년",
        schedule: "주 3회, 각 90분",
        capacity: "반별 8명 이내",
        description: "초등학생들의 기본 학습능력을 배양하고 자기 주도 학습 습관을 형성하는 통합 프로그램입니다. \
                      국어, 영어, 수학의 기초를 탄탄히 다지면서 논리적 사고력과 문제 해결 능력을 함께 키웁니다.",
    },
    Program {
        name: "창의사고력반",
        title: "리틀즈 창의사고력반",
        badge: Some("추천"),
        target: "초등학교 3-6학년",
        schedule: "주 2회, 각 90분",
        capacity: "반별 6명 이내",
        description: "일상과 학습에서 마주하는 모든 문제를 창의적으로 해결할 수 있는 사고력 증진 프로그램입니다. \
                      퍼즐, 게임, 토론 등 다양한 활동을 통해 비판적 사고와 창의적 아이디어 도출 능력을 키웁니다.",
    },
    Program {
        name: "영어 마스터반",
        title: "리틀즈 영어 마스터반",
        badge: Some("신규"),
        target: "초등학교 1-6학년",
        schedule: "주 2회, 각 90분",
        capacity: "반별 6명 이내",
        description: "영어에 대한 흥미와 자신감을 키우는 실용적인 영어 프로그램입니다. \
                      원어민 교사와 함께하는 회화 수업으로 실제 상황에서 영어를 자연스럽게 사용할 수 있도록 합니다.",
    },
];

pub const PROCESS: &[Step] = &[
    Step { title: "개인별 학습 진단", description: "학생의 현재 학습 수준과 성향을 정확하게 진단합니다" },
    Step { title: "맞춤형 학습 설계", description: "진단 결과를 바탕으로 개인별 맞춤 커리큘럼을 설계합니다" },
    Step { title: "체계적 학습 진행", description: "소규모 그룹 또는 1:1 수업으로 체계적인 학습을 진행합니다" },
    Step { title: "정기적 평가 및 피드백", description: "학습 성과를 정기적으로 평가하고 개선점을 도출합니다" },
];

pub const PHILOSOPHY: &[Step] = &[
    Step { title: "창의적 사고", description: "틀에 박힌 교육이 아닌 다양한 관점에서 사고하고 문제를 해결할 수 있는 창의적 사고력을 키웁니다." },
    Step { title: "성장 마인드셋", description: "실패를 두려워하지 않고 도전하며 끊임없이 성장하는 마인드셋을 길러줍니다." },
    Step { title: "협력과 소통", description: "다른 사람들과 효과적으로 협력하고 소통하는 능력을 기르는 데 중점을 둡니다." },
    Step { title: "비판적 사고", description: "정보를 분석하고 평가하여 합리적인 결론을 도출하는 비판적 사고 능력을 배양합니다." },
];

pub const STRENGTHS: &[Step] = &[
    Step { title: "전문 교사진", description: "각 분야에서 풍부한 경험을 가진 전문 교사진이 아이들을 지도합니다." },
    Step { title: "소규모 맞춤 수업", description: "10명 이내 소규모 클래스로 개인별 맞춤형 교육을 제공합니다." },
    Step { title: "체계적인 커리큘럼", description: "체계적으로 설계된 커리큘럼으로 단계별 학습이 가능합니다." },
    Step { title: "학부모 소통", description: "정기적인 상담과 피드백으로 아이의 성장 과정을 공유합니다." },
];

pub const FEATURED: &[Featured] = &[
    Featured {
        title: "창의미술",
        age: "5~7세",
        schedule: "화, 목 15:00~16:30",
        group: "최대 8명 소규모 그룹",
        description: "다양한 재료와 기법을 활용하여 아이들의 창의력과 표현력을 키워주는 미술 프로그램입니다.",
    },
    Featured {
        title: "음악놀이",
        age: "4~6세",
        schedule: "월, 수, 금 14:00~15:00",
        group: "최대 10명 소규모 그룹",
        description: "리듬과 멜로디를 통해 아이들의 음악적 감각과 정서 발달을 돕는 즐거운 음악 프로그램입니다.",
    },
    Featured {
        title: "독서논술",
        age: "6~9세",
        schedule: "월, 수, 금 16:00~17:30",
        group: "최대 6명 소규모 그룹",
        description: "연령별 맞춤 도서를 통해 독해력과 사고력, 표현력을 키우는 독서논술 프로그램입니다.",
    },
];

pub const HOME_HEADLINE: &str = "아이의 성장을 함께하는 공간, 리틀즈 학원";
pub const HOME_SUBTITLE: &str = "즐거운 학습 환경과 전문적인 교육으로 아이의 꿈과 재능을 키워주는 곳입니다";
pub const HOME_HIGHLIGHTS: &[&str] = &[
    "개인별 맞춤 교육 프로그램",
    "전문 교육 자격을 갖춘 선생님들",
    "안전하고 쾌적한 학습 환경",
    "정기적인 학부모 상담과 피드백",
];

/// Number of notices previewed on the home page.
pub const HOME_NOTICE_COUNT: u64 = 3;

pub fn programs_page() -> ProgramsPage {
    ProgramsPage {
        headline: "리틀즈 학원 프로그램",
        programs: PROGRAMS,
        process: PROCESS,
        call_to_action: "아이에게 맞는 최적의 학습 프로그램을 안내해 드립니다",
    }
}

pub fn about_page() -> AboutPage {
    AboutPage {
        academy: ACADEMY_NAME,
        headline: "아이의 꿈을 키우는 리틀즈 학원",
        subtitle: "교육 철학과 체계적인 프로그램으로 아이들의 성장을 지원합니다",
        introduction: &[
            "리틀즈 학원은 2015년 설립된 이래로 아이들이 즐겁게 학습하고 성장할 수 있는 환경을 만들기 위해 노력해왔습니다.",
            "우리는 단순히 지식을 전달하는 것이 아니라, 아이들의 호기심과 창의성을 자극하여 스스로 학습하는 능력을 키우는 데 초점을 맞추고 있습니다.",
            "모든 학생들이 자신의 속도에 맞게 배우고 성장할 수 있는 개인 맞춤형 교육 방식을 추구합니다.",
        ],
        philosophy: PHILOSOPHY,
        strengths: STRENGTHS,
        founded: 2015,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_names_are_unique() {
        let mut names: Vec<_> = PROGRAMS.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PROGRAMS.len());
        assert!(PROGRAMS.iter().all(|p| p.title.ends_with(p.name)));
    }

    #[test]
    fn pages_serialize() {
        let v = serde_json::to_value(programs_page()).unwrap();
        assert_eq!(v["programs"].as_array().unwrap().len(), 3);
        assert_eq!(v["process"].as_array().unwrap().len(), 4);
        let v = serde_json::to_value(about_page()).unwrap();
        assert_eq!(v["founded"], 2015);
        assert_eq!(v["philosophy"][0]["title"], "창의적 사고");
    }
}
