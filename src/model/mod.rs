/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/
/// HTTP request utilities: URL building, auth headers, status checks
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
