//! # 건강검진 조회 신청서 모델
//!
//! 사용자가 입력하는 신청서와 선택형 코드(통신사, 간편인증 수단),
//! 그리고 입력 필드 식별자를 정의합니다.
//!
//! JSON 필드명은 외부 API 규격과 동일한 camelCase를 사용합니다.
//!
//! ```json
//! {
//!   "id": "user@example.com",
//!   "loginTypeLevel": "1",
//!   "legalName": "홍길동",
//!   "birthdate": "19801212",
//!   "phoneNo": "01012345678",
//!   "telecom": "0",
//!   "startDate": "2015",
//!   "endDate": "2025"
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// 통신사 코드
///
/// 알뜰폰은 각 모회사 코드로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Telecom {
    /// SKT (SKT 알뜰폰 포함)
    #[default]
    #[serde(rename = "0")]
    Skt,
    /// KT (KT 알뜰폰 포함)
    #[serde(rename = "1")]
    Kt,
    /// LG U+ (LG U+ 알뜰폰 포함)
    #[serde(rename = "2")]
    LgUplus,
}

impl Telecom {
    pub const ALL: [Telecom; 3] = [Telecom::Skt, Telecom::Kt, Telecom::LgUplus];

    pub fn code(&self) -> &'static str {
        match self {
            Telecom::Skt => "0",
            Telecom::Kt => "1",
            Telecom::LgUplus => "2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// 간편인증 수단 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoginTypeLevel {
    #[default]
    #[serde(rename = "1")]
    KakaoTalk,
    #[serde(rename = "2")]
    Payco,
    #[serde(rename = "3")]
    SamsungPass,
    #[serde(rename = "4")]
    KbStar,
    #[serde(rename = "5")]
    TelecomPass,
    #[serde(rename = "6")]
    Naver,
    #[serde(rename = "7")]
    Shinhan,
    #[serde(rename = "8")]
    Toss,
    #[serde(rename = "9")]
    BankSalad,
    #[serde(rename = "10")]
    Hana,
    #[serde(rename = "11")]
    NhMobile,
}

impl LoginTypeLevel {
    pub const ALL: [LoginTypeLevel; 11] = [
        LoginTypeLevel::KakaoTalk,
        LoginTypeLevel::Payco,
        LoginTypeLevel::SamsungPass,
        LoginTypeLevel::KbStar,
        LoginTypeLevel::TelecomPass,
        LoginTypeLevel::Naver,
        LoginTypeLevel::Shinhan,
        LoginTypeLevel::Toss,
        LoginTypeLevel::BankSalad,
        LoginTypeLevel::Hana,
        LoginTypeLevel::NhMobile,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LoginTypeLevel::KakaoTalk => "1",
            LoginTypeLevel::Payco => "2",
            LoginTypeLevel::SamsungPass => "3",
            LoginTypeLevel::KbStar => "4",
            LoginTypeLevel::TelecomPass => "5",
            LoginTypeLevel::Naver => "6",
            LoginTypeLevel::Shinhan => "7",
            LoginTypeLevel::Toss => "8",
            LoginTypeLevel::BankSalad => "9",
            LoginTypeLevel::Hana => "10",
            LoginTypeLevel::NhMobile => "11",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }
}

/// 신청서 입력 필드 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Id,
    LoginType,
    LoginTypeLevel,
    LegalName,
    Birthdate,
    PhoneNo,
    Telecom,
    StartDate,
    EndDate,
}

impl FormField {
    /// 형식 검증 규칙이 있는 필드들 (1단계 요청 전 전체 재검증 대상)
    pub const VALIDATED: [FormField; 4] = [
        FormField::Id,
        FormField::LegalName,
        FormField::PhoneNo,
        FormField::Birthdate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::LoginType => "loginType",
            FormField::LoginTypeLevel => "loginTypeLevel",
            FormField::LegalName => "legalName",
            FormField::Birthdate => "birthdate",
            FormField::PhoneNo => "phoneNo",
            FormField::Telecom => "telecom",
            FormField::StartDate => "startDate",
            FormField::EndDate => "endDate",
        }
    }

    pub fn is_validated(&self) -> bool {
        Self::VALIDATED.contains(self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 건강검진 조회 신청서
///
/// 1단계 요청 본문으로 그대로 직렬화되며, 2단계 요청에서는
/// 세션 토큰과 함께 평탄화되어 전송됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionForm {
    /// 사용자 식별자 (이메일)
    pub id: String,
    /// 외부 API가 요구하는 경우에만 전달되는 로그인 유형. 비어 있으면 보내지 않습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_type: Option<String>,
    /// 간편인증 수단
    pub login_type_level: LoginTypeLevel,
    /// 실명 (한글)
    pub legal_name: String,
    /// 생년월일 (YYYYMMDD)
    pub birthdate: String,
    /// 휴대전화 번호 (010XXXXXXXX)
    pub phone_no: String,
    /// 통신사
    pub telecom: Telecom,
    /// 조회 시작 연도
    pub start_date: String,
    /// 조회 종료 연도
    pub end_date: String,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            login_type: None,
            login_type_level: LoginTypeLevel::default(),
            legal_name: String::new(),
            birthdate: String::new(),
            phone_no: String::new(),
            telecom: Telecom::default(),
            start_date: "2015".to_string(),
            end_date: "2025".to_string(),
        }
    }
}

impl SubmissionForm {
    /// 필드의 현재 값을 문자열로 반환합니다. 선택형 필드는 코드값입니다.
    pub fn value_of(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::LoginType => self.login_type.as_deref().unwrap_or(""),
            FormField::LoginTypeLevel => self.login_type_level.code(),
            FormField::LegalName => &self.legal_name,
            FormField::Birthdate => &self.birthdate,
            FormField::PhoneNo => &self.phone_no,
            FormField::Telecom => self.telecom.code(),
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
        }
    }

    /// 필드 값을 갱신합니다.
    ///
    /// `loginType`은 앞뒤 공백을 지우고, 비어 있으면 값을 없앱니다.
    /// 선택형 필드에 목록에 없는 코드가 들어오면 값을 바꾸지 않고
    /// `false`를 반환합니다.
    pub fn set_value(&mut self, field: FormField, value: String) -> bool {
        match field {
            FormField::Id => self.id = value,
            FormField::LegalName => self.legal_name = value,
            FormField::Birthdate => self.birthdate = value,
            FormField::PhoneNo => self.phone_no = value,
            FormField::StartDate => self.start_date = value,
            FormField::EndDate => self.end_date = value,
            FormField::LoginType => {
                let trimmed = value.trim();
                self.login_type = (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            FormField::LoginTypeLevel => match LoginTypeLevel::from_code(&value) {
                Some(level) => self.login_type_level = level,
                None => return false,
            },
            FormField::Telecom => match Telecom::from_code(&value) {
                Some(telecom) => self.telecom = telecom,
                None => return false,
            },
        }
        true
    }
}
