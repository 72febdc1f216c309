//! Hand-authored step templates, one per scenario category.
//!
//! Every template carries its own 1-based ids. `General` doubles as the
//! fallback for categories missing from [`TEMPLATES`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{ScenarioCategory, StepType, WorkflowStep};

/// A step as it is stored in a template.
#[derive(Debug, Clone, Copy)]
pub struct StepTemplate {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub step_type: StepType,
}

impl StepTemplate {
    const fn new(
        id: u32,
        name: &'static str,
        description: &'static str,
        step_type: StepType,
    ) -> Self {
        Self {
            id,
            name,
            description,
            step_type,
        }
    }

    pub fn to_step(&self) -> WorkflowStep {
        WorkflowStep::new(self.id, self.name, self.description, self.step_type)
    }
}

const ECOMMERCE: &[StepTemplate] = &[
    StepTemplate::new(1, "Start Shopping", "Customer opens the store to browse the catalog", StepType::Trigger),
    StepTemplate::new(2, "Browse Products", "Customer searches and filters the product catalog", StepType::UserAction),
    StepTemplate::new(3, "Add to Cart", "Selected product is added to the shopping cart", StepType::UserAction),
    StepTemplate::new(4, "Check Inventory", "Verify stock levels for every cart item", StepType::SystemCheck),
    StepTemplate::new(5, "Items Available?", "Decide whether every item can be fulfilled", StepType::Decision),
    StepTemplate::new(6, "Enter Shipping Details", "Customer provides the shipping address and delivery option", StepType::UserInput),
    StepTemplate::new(7, "Process Payment", "Charge the customer through the payment gateway", StepType::Integration),
    StepTemplate::new(8, "Create Order", "Persist the order with its line items", StepType::DatabaseWrite),
    StepTemplate::new(9, "Send Confirmation", "Email the order receipt to the customer", StepType::Notification),
    StepTemplate::new(10, "Checkout Complete", "Show the order summary page", StepType::End),
];

const AUTH: &[StepTemplate] = &[
    StepTemplate::new(1, "Open Login Page", "User navigates to the sign in screen", StepType::Trigger),
    StepTemplate::new(2, "Enter Credentials", "User submits email and password", StepType::UserInput),
    StepTemplate::new(3, "Validate Input", "Check that required fields are present and well formed", StepType::SystemCheck),
    StepTemplate::new(4, "Look Up Account", "Fetch the user account by email", StepType::DatabaseQuery),
    StepTemplate::new(5, "Credentials Valid?", "Compare the password hash with the stored one", StepType::Decision),
    StepTemplate::new(6, "Create Session", "Issue a session token for the authenticated user", StepType::SystemAction),
    StepTemplate::new(7, "Record Login Attempt", "Write the attempt to the audit log", StepType::Logging),
    StepTemplate::new(8, "Redirect to Dashboard", "Send the user to the home dashboard", StepType::Navigation),
    StepTemplate::new(9, "Login Complete", "User is signed in", StepType::End),
];

const BOOKING: &[StepTemplate] = &[
    StepTemplate::new(1, "Start Booking", "Customer opens the reservation page", StepType::Trigger),
    StepTemplate::new(2, "Select Date and Time", "Customer picks a preferred slot from the calendar", StepType::UserInput),
    StepTemplate::new(3, "Check Availability", "Query open slots for the requested time", StepType::DatabaseQuery),
    StepTemplate::new(4, "Slot Available?", "Decide whether the requested slot is free", StepType::Decision),
    StepTemplate::new(5, "Enter Guest Details", "Customer provides name and contact information", StepType::UserInput),
    StepTemplate::new(6, "Take Deposit", "Collect the deposit payment for the reservation", StepType::Integration),
    StepTemplate::new(7, "Save Booking", "Store the confirmed booking", StepType::DatabaseWrite),
    StepTemplate::new(8, "Send Booking Confirmation", "Email the confirmation and calendar invite", StepType::Notification),
    StepTemplate::new(9, "Booking Complete", "Reservation is confirmed", StepType::End),
];

const SUPPORT: &[StepTemplate] = &[
    StepTemplate::new(1, "Customer Reports Issue", "Customer contacts the help desk", StepType::Trigger),
    StepTemplate::new(2, "Submit Ticket Form", "Customer describes the problem and attaches files", StepType::UserInput),
    StepTemplate::new(3, "Create Ticket", "Store the support ticket with its details", StepType::DatabaseWrite),
    StepTemplate::new(4, "Categorize Ticket", "Classify the ticket by topic and urgency", StepType::AiProcess),
    StepTemplate::new(5, "Assign Agent", "Route the ticket to an available agent", StepType::SystemAction),
    StepTemplate::new(6, "Agent Investigates", "Agent reviews the report and reproduces the problem", StepType::Review),
    StepTemplate::new(7, "Resolved?", "Decide whether the proposed fix solves the problem", StepType::Conditional),
    StepTemplate::new(8, "Escalate to Specialist", "Hand the ticket to second level support", StepType::WorkflowAction),
    StepTemplate::new(9, "Notify Customer", "Send a status update email to the customer", StepType::Notification),
    StepTemplate::new(10, "Close Ticket", "Mark the ticket as closed", StepType::End),
];

const CONTENT: &[StepTemplate] = &[
    StepTemplate::new(1, "Start Draft", "Author opens the editor to write a new post", StepType::Trigger),
    StepTemplate::new(2, "Write Content", "Author writes the article body and adds media", StepType::UserInput),
    StepTemplate::new(3, "Save Draft", "Persist the draft content", StepType::DatabaseWrite),
    StepTemplate::new(4, "Submit for Review", "Author sends the draft to an editor", StepType::UserAction),
    StepTemplate::new(5, "Editorial Review", "Editor checks tone, accuracy and formatting", StepType::Review),
    StepTemplate::new(6, "Approved?", "Decide whether the draft is ready to publish", StepType::Decision),
    StepTemplate::new(7, "Request Changes", "Return the draft to the author with comments", StepType::WorkflowAction),
    StepTemplate::new(8, "Publish Content", "Make the article publicly visible", StepType::SystemAction),
    StepTemplate::new(9, "Content Live", "Article is published", StepType::End),
];

const WORKFLOW: &[StepTemplate] = &[
    StepTemplate::new(1, "Submit Request", "Requester files a new approval request", StepType::Trigger),
    StepTemplate::new(2, "Fill Request Form", "Requester enters the details and justification", StepType::UserInput),
    StepTemplate::new(3, "Validate Request", "Check the request against policy rules", StepType::SystemCheck),
    StepTemplate::new(4, "Create Approval Task", "Assign a review task to the approver", StepType::WorkflowAction),
    StepTemplate::new(5, "Manager Review", "Approver reviews the request", StepType::Review),
    StepTemplate::new(6, "Approved?", "Decide whether the request is approved", StepType::Decision),
    StepTemplate::new(7, "Return to Requester", "Send the request back with the rejection reason", StepType::WorkflowAction),
    StepTemplate::new(8, "Update Request Status", "Store the final status of the request", StepType::DatabaseWrite),
    StepTemplate::new(9, "Notify Requester", "Email the outcome to the requester", StepType::Notification),
    StepTemplate::new(10, "Workflow Complete", "Request is closed", StepType::End),
];

const DATA: &[StepTemplate] = &[
    StepTemplate::new(1, "Start Import", "Scheduled job or user starts the data import", StepType::Trigger),
    StepTemplate::new(2, "Fetch Source Data", "Pull the dataset from the external source", StepType::Integration),
    StepTemplate::new(3, "Validate Records", "Check every record against the expected format", StepType::SystemCheck),
    StepTemplate::new(4, "Valid Format?", "Decide whether the batch passes validation", StepType::Decision),
    StepTemplate::new(5, "Handle Invalid Records", "Quarantine rejected records and collect errors", StepType::ErrorHandling),
    StepTemplate::new(6, "Transform Data", "Normalize and enrich the records", StepType::DataOperation),
    StepTemplate::new(7, "Load Into Storage", "Write the transformed records to the database", StepType::DatabaseWrite),
    StepTemplate::new(8, "Generate Report", "Summarize imported and rejected counts", StepType::Display),
    StepTemplate::new(9, "Import Complete", "Pipeline run finished", StepType::End),
];

const NOTIFICATION: &[StepTemplate] = &[
    StepTemplate::new(1, "Event Occurs", "A system event requires the user's attention", StepType::Trigger),
    StepTemplate::new(2, "Load Preferences", "Read the user's notification preferences", StepType::DatabaseQuery),
    StepTemplate::new(3, "Opted In?", "Decide whether the user accepts this kind of message", StepType::Conditional),
    StepTemplate::new(4, "Compose Message", "Render the message from its template", StepType::SystemAction),
    StepTemplate::new(5, "Send Notification", "Deliver the message by email, SMS or push", StepType::Notification),
    StepTemplate::new(6, "Log Delivery", "Record the delivery result", StepType::Logging),
    StepTemplate::new(7, "Notification Sent", "Delivery finished", StepType::End),
];

const GENERAL: &[StepTemplate] = &[
    StepTemplate::new(1, "Start", "The scenario begins", StepType::Trigger),
    StepTemplate::new(2, "Collect Input", "Gather the information the scenario needs", StepType::UserInput),
    StepTemplate::new(3, "Validate Input", "Check the input for completeness", StepType::SystemCheck),
    StepTemplate::new(4, "Input Valid?", "Decide whether processing can continue", StepType::Decision),
    StepTemplate::new(5, "Handle Errors", "Report problems back to the requester", StepType::ErrorHandling),
    StepTemplate::new(6, "Process Request", "Carry out the main scenario logic", StepType::SystemAction),
    StepTemplate::new(7, "Store Results", "Save the outcome", StepType::DatabaseWrite),
    StepTemplate::new(8, "Show Results", "Present the outcome to the requester", StepType::Display),
    StepTemplate::new(9, "Send Update", "Inform interested parties of the outcome", StepType::Notification),
    StepTemplate::new(10, "End", "The scenario is finished", StepType::End),
];

/// Template table. Lookups that miss fall back to [`GENERAL`].
pub static TEMPLATES: Lazy<HashMap<ScenarioCategory, &'static [StepTemplate]>> = Lazy::new(|| {
    HashMap::from([
        (ScenarioCategory::Ecommerce, ECOMMERCE),
        (ScenarioCategory::Auth, AUTH),
        (ScenarioCategory::Booking, BOOKING),
        (ScenarioCategory::Support, SUPPORT),
        (ScenarioCategory::Content, CONTENT),
        (ScenarioCategory::Workflow, WORKFLOW),
        (ScenarioCategory::Data, DATA),
        (ScenarioCategory::Notification, NOTIFICATION),
        (ScenarioCategory::General, GENERAL),
    ])
});

/// Template for a category.
pub fn template_for(category: ScenarioCategory) -> &'static [StepTemplate] {
    TEMPLATES.get(&category).copied().unwrap_or(GENERAL)
}

/// Expand the template of `category` into workflow steps.
///
/// `_description` does not change the output yet.
pub fn generate_steps(
    category: ScenarioCategory,
    _description: &str,
) -> Vec<WorkflowStep> {
    template_for(category).iter().map(StepTemplate::to_step).collect()
}
