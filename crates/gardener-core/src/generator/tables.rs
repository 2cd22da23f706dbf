//! Reference vocabulary for ticket generation.
//!
//! Everything a generated ticket can contain is drawn from these tables:
//! the campus species and zone lists, the free-text pools, the personnel
//! roster, and the weight tables for skewed sampling. The strings are the
//! consumer application's own display vocabulary and must round-trip
//! byte-for-byte, Thai text included.

use crate::models::{Category, DamageType, Priority, TicketStatus};

/// Campus zone entry: a short code paired with its display name.
#[derive(Debug, Clone, Copy)]
pub struct ZoneEntry {
    pub code: &'static str,
    pub name: &'static str,
}

/// The ten campus zones tickets can be tagged with.
pub const ZONES: &[ZoneEntry] = &[
    ZoneEntry { code: "A1", name: "ถนนปรีดี พนมยงค์ (ถนนหลัก)" },
    ZoneEntry { code: "A2", name: "ถนนยูงทอง" },
    ZoneEntry { code: "B1", name: "โซนสนามกีฬา" },
    ZoneEntry { code: "B2", name: "โซนหอพักนักศึกษา" },
    ZoneEntry { code: "C1", name: "โซนคณะวิศวกรรมศาสตร์" },
    ZoneEntry { code: "C2", name: "โซนคณะนิติศาสตร์" },
    ZoneEntry { code: "D1", name: "โซนหอสมุด" },
    ZoneEntry { code: "D2", name: "โซนอาคารบริการ" },
    ZoneEntry { code: "E1", name: "โซนสระว่ายน้ำ" },
    ZoneEntry { code: "E2", name: "โซนสวนพฤกษศาสตร์" },
];

/// Tree species planted on campus.
pub const TREE_TYPES: &[&str] = &[
    "ต้นนนทรี",
    "ต้นพฤกษ์",
    "ต้นราชพฤกษ์",
    "ต้นอินทนิล",
    "ต้นหางนกยูง",
    "ต้นมะฮอกกานี",
    "ต้นสน",
    "ต้นไทร",
    "ต้นประดู่",
    "ต้นตะแบก",
];

/// Incident categories, sampled uniformly.
pub const CATEGORIES: &[Category] = &[Category::Accident, Category::Nature, Category::Damage];

/// Workflow statuses, sampled uniformly by the backfill batch.
pub const STATUSES: &[TicketStatus] = &[
    TicketStatus::New,
    TicketStatus::InProgress,
    TicketStatus::Completed,
    TicketStatus::Pending,
];

/// Priorities, sampled uniformly.
pub const PRIORITIES: &[Priority] = &[Priority::Normal, Priority::Urgent];

/// Damage kinds, sampled uniformly by the backfill batch.
pub const DAMAGE_TYPES: &[DamageType] = &[
    DamageType::Broken,
    DamageType::Tilted,
    DamageType::Fallen,
    DamageType::Replant,
];

/// Title suffixes appended to the species name by the backfill batch.
pub const BACKFILL_TITLE_SUFFIXES: &[&str] = &["กิ่งหัก", "เอียง", "โค่นล้ม", "มีปลวก"];

/// Remediation texts used by the backfill batch.
pub const BACKFILL_OPERATIONS: &[&str] = &[
    "ตัดแต่งกิ่งเพื่อลดน้ำหนักของลำต้นและทรงพุ่ม ก่อนย้ายไปยังที่พักฟื้น",
    "ดึงลำต้นให้ตรง และค้ำยันใหม่",
    "ตัดทอน ขนย้าย และคืนสภาพพื้นที่ สาเหตุ จากโรคแมลงและปลวก ทำให้รากและลำต้นผุ เน่า",
    "ตัดแต่งแผลของกิ่งที่ฉีกหัก พร้อมเก็บเคลียร์ความสะอาดในพื้นที่",
    "ปลูกเพื่อทดแทนต้นเดิมที่โค่นล่ม หรือ ยืนต้นตาย",
];

/// Remediation texts used by the monsoon batch.
pub const MONSOON_OPERATIONS: &[&str] = &[
    "ตัดแต่งกิ่งเพื่อลดน้ำหนักของลำต้นและทรงพุ่ม ก่อนย้ายไปยังที่พักฟื้น",
    "ดึงลำต้นให้ตรง และค้ำยันใหม่",
    "ตัดทอน ขนย้าย และคืนสภาพพื้นที่",
    "ตัดแต่งแผลของกิ่งที่ฉีกหัก",
    "ปลูกเพื่อทดแทนต้นเดิมที่โค่นล้ม",
];

/// Placeholder remediation text for tickets whose work has not started.
pub const PENDING_OPERATION: &str = "รอการดำเนินการ";

/// Impact summaries.
pub const IMPACTS: &[&str] = &[
    "ขวางทางเดิน",
    "เสี่ยงทับอาคาร",
    "บดบังวิสัยทัศน์",
    "ไฟฟ้าขัดข้อง",
];

/// Grounds crew roster assignees are drawn from.
pub const ASSIGNEES: &[&str] = &["สมชาย การดี", "พีระพล แสนสุข", "วิชัย ใจดี", "สมศักดิ์ ดีมาก"];

/// Image URLs attached to backfill tickets.
pub const BACKFILL_IMAGE_URLS: &[&str] = &[
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAi8kiOMRopdjGSOlptNcZkg6jeCDmIkKN345K3y5CpRSik9JCOHDpCuz1scew8brwfk_TOUmGG8zOi9842WDzUkffevqlXtcgZUYDqbp4QPMUZH47Vv4sxl3kp2UonojpoHv2ENszkZabJxZWNgj-BQW_9AvBAPaS7mp-tg9fq_dDsK0QjPbukeI_jJqdRR6BrMxqxtjzgjfdzK9766ZaQHuGRK0sAp4VpmaIxbQhFsk_Q-2IPohvWgLmYEs8kk4zDzUaUhqmrHBk",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAqIdRWWMME_2YbQukMegmyMbzUiTjqByzOZl6qI8NTURu4tI1fxBu7_yUXCAChov-zwxaWCO9OeRCMCWUQtgJjTX5_Pudw5NJtiiDaV7Hy5s7uQybeH1R9JcqsNPlaqH54El1LQPRhbLTGgZgjZNFGCzpSHXR9cE42m9ViwsyENiXJXHBT0v46kjBZGWV0u-wriQRCQrGQeDEIIL4UjIe6TU-CKZK4mIx8nRg1lZzzkuadvh0BreJ78axe-af1QgVwribAxHeHwoY",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuCl4CfONdV-UlMcG6Mo0gJGrx2yewJ_2fbmVjBCa24kfYrauSYDomkssIJPQDR54JPJg85O7pYCHy36Bc8g4x7aBOc3x8QVKHfWxpk6bCuO6KsMaj82Kgl3zE81I1ImHvCVmSCLkSzdfz13pFhlL-Cf1sPMBbHyv3cqNMReDVkeYzSz3Wkb-7qRJsbrBEAXlAB5fTRnQn1uGDnr4012SA0nd_pXLnpbw9GCXJcYKEjrPB_sxyqa_rl3F9VRD-66Rs1OAnxTKpMlBkk",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuADv61QBDFe7w-zN2Qb4QcIlWSzZ8KUetnvuFVRyXz_tu76iZDBTge-sw1i8w4d2b9dwAxwZnY-KgkrBN44IC5zjxCYwST_IW9ClUWXVdZx7ZNuUQLbuRn5XS2Qx-R0f6VACTGSopufC2P0u9W88qGsIj-h0eKOn9OQ3HfC2cp-GOfUa9liaQKR8EiyQp_ibRJVv0gGHQioihOS7OZr5BUAHbmtdOZkGsY6_WZ103kRdcmmX8Kvq-DZcTist4tPDFhRnWwG7c2mas4",
];

/// Image URLs attached to monsoon tickets.
pub const MONSOON_IMAGE_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1592150621344-79838b56da3d?w=800",
    "https://images.unsplash.com/photo-1558905612-16715494d6d5?w=800",
    "https://images.unsplash.com/photo-1501854140801-50d01674aa3e?w=800",
    "https://images.unsplash.com/photo-1425913397330-cf8af2ff40a1?w=800",
    "https://images.unsplash.com/photo-1511497584788-876760111969?w=800",
];

/// Marker note identifying backfill tickets as synthetic.
pub const BACKFILL_MARKER: &str = "ข้อมูลประวัติย้อนหลังจากการขยายฐานข้อมูล";

/// Marker note identifying monsoon tickets; the monsoon run removes
/// earlier tickets carrying it before appending a fresh batch.
pub const MONSOON_MARKER: &str = "ข้อมูลจำลองหน้าฝนมรสุม";

/// Status weights for the monsoon batch's current period. Completed
/// dominates at 8 parts against 1 each for the rest, the same ratio the
/// original tool expressed by repeating list entries.
pub const MONSOON_STATUS_WEIGHTS: &[(TicketStatus, u32)] = &[
    (TicketStatus::Completed, 8),
    (TicketStatus::New, 1),
    (TicketStatus::InProgress, 1),
    (TicketStatus::Pending, 1),
];

/// Damage weights for the monsoon batch: fallen trees dominate the storm
/// season at 10 parts against 3 broken and 2 tilted.
pub const MONSOON_DAMAGE_WEIGHTS: &[(DamageType, u32)] = &[
    (DamageType::Fallen, 10),
    (DamageType::Broken, 3),
    (DamageType::Tilted, 2),
];
