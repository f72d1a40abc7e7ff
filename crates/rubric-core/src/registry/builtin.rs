//! The ProcessPrompt v2.2 table: 9 categories, 44 measures.

pub(super) const LABEL: &str = crate::constants::BUILTIN_SCHEMA_LABEL;

/// (category name, first ordinal, last ordinal)
pub(super) const CATEGORIES: [(&str, u8, u8); 9] = [
    ("Governance & Strategic Oversight", 1, 7),
    ("Risk Identification & Assessment", 8, 16),
    ("Asset Design & Resilience", 17, 21),
    ("Crisis Management", 22, 26),
    ("Supply Chain Management", 27, 31),
    ("Insurance & Risk Transfer", 32, 35),
    ("Data Quality & Assurance", 36, 37),
    ("Workforce & Community", 38, 40),
    ("KPIs & Outcomes", 41, 44),
];

/// Measure names in id order, M01 first.
pub(super) const MEASURE_NAMES: [&str; 44] = [
    "Board Oversight of Physical Climate Risk",
    "Management Responsibility for Physical Climate Risk",
    "Integration into Enterprise Risk Management",
    "Formal Commitments and Policies",
    "Scenario Analysis and Forward-Looking Assessment",
    "Stakeholder Engagement on Physical Risk",
    "Policy Advocacy and Industry Collaboration",
    "Hazard Identification",
    "Asset-Level Exposure Assessment",
    "Vulnerability Assessment",
    "Scenario-Based Modeling",
    "Financial Quantification of Physical Risks",
    "Supply Chain Climate Risk Assessment",
    "Third-Party Validation of Risk Assessments",
    "Regulatory Compliance and Reporting",
    "Quality and Granularity of Disclosure",
    "Climate-Resilient Design Standards",
    "Retrofitting and Hardening Programs",
    "Nature-Based Solutions",
    "Critical Infrastructure Protection",
    "Strategic Relocation or Divestment",
    "Business Continuity Plans",
    "Emergency Response Protocols",
    "Crisis Communication Systems",
    "Recovery Time Objectives",
    "Post-Event Review and Learning",
    "Supplier Climate Risk Assessment",
    "Geographic Diversification",
    "Contractual Risk-Sharing Provisions",
    "Buffer Inventory and Safety Stock",
    "Logistics and Transportation Flexibility",
    "Insurance Coverage Adequacy",
    "Parametric Insurance Products",
    "Captive Insurance or Self-Insurance",
    "Claims Management and Recovery",
    "Climate Data Governance",
    "External Assurance of Climate Risk Data",
    "Employee Safety and Welfare",
    "Community Engagement and Support",
    "Just Transition Considerations",
    "Operational Downtime Metrics",
    "Financial Impact Disclosure",
    "Supply Chain Disruption Metrics",
    "Adaptation Investment and Spend",
];
