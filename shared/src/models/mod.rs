//! Entity Models

// CRM
pub mod booking;
pub mod customer;
pub mod interaction;
pub mod quote;
pub mod staff;
pub mod task;

// Marketing site
pub mod site;

// Re-exports
pub use booking::{
    BookingCreate, BookingStatus, BookingUpdate, BookingWithCustomer, EventBooking, EventType,
    Package, PaymentStatus,
};
pub use customer::{CustomerCreate, CustomerStatus, CustomerUpdate, CustomerWithStats, LeadSource};
pub use interaction::{Interaction, InteractionCreate, InteractionType};
pub use quote::{Quote, QuoteCreate, QuoteStatus, QuoteStatusUpdate};
pub use staff::Staff;
pub use task::{Task, TaskCreate, TaskPriority, TaskStatus, TaskStatusUpdate, TaskUpdate};

pub use site::{
    ContactInquiry, ContactSubmission, InquiryStatus, Portfolio, PortfolioCategory,
    PortfolioCreate, PortfolioImage, PortfolioImageCreate, PortfolioUpdate, Service,
    ServiceCreate, ServiceUpdate, SiteContent, SiteContentUpsert, TeamMember, TeamMemberCreate,
    TeamMemberUpdate,
};
